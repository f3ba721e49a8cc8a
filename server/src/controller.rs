use std::future::IntoFuture;
use std::marker::PhantomData;

// Request -> dto -> use case -> response pipeline.
// Based on https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait Exhaust<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P> {
    transformer: T,
    presenter: P,
}

impl<T, P> Controller<T, P> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
        }
    }

    pub fn intake<I>(self, input: I) -> Transformed<P, T::To>
    where
        T: Intake<I>,
    {
        Transformed {
            transformed: self.transformer.emit(input),
            presenter: self.presenter,
        }
    }
}

impl<P> Controller<(), P> {
    /// Runs a use case that takes no request input.
    pub async fn bypass<F, Fut, O, E>(self, f: F) -> Result<P::To, E>
    where
        P: Exhaust<O>,
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        Ok(self.presenter.emit(f().await?))
    }
}

pub struct Transformed<P, D> {
    transformed: D,
    presenter: P,
}

impl<P, D> Transformed<P, D> {
    pub async fn handle<F, Fut, O, E>(self, f: F) -> Result<P::To, E>
    where
        P: Exhaust<O>,
        F: FnOnce(D) -> Fut,
        Fut: IntoFuture<Output = Result<O, E>>,
    {
        let output = f(self.transformed).await?;
        Ok(self.presenter.emit(output))
    }
}

#[cfg(test)]
mod test {
    use super::{Controller, Exhaust, Intake};

    struct Doubler;

    impl Intake<u32> for Doubler {
        type To = u64;
        fn emit(&self, input: u32) -> Self::To {
            u64::from(input) * 2
        }
    }

    struct Label;

    impl Exhaust<u64> for Label {
        type To = String;
        fn emit(&self, input: u64) -> Self::To {
            format!("value={input}")
        }
    }

    #[tokio::test]
    async fn pipes_through_use_case() {
        let out: Result<String, ()> = Controller::new(Doubler, Label)
            .intake(21)
            .handle(|dto| async move { Ok(dto) })
            .await;
        assert_eq!(out, Ok("value=42".to_string()));

        let out: Result<String, &str> = Controller::new(Doubler, Label)
            .intake(1)
            .handle(|_| async move { Err::<u64, _>("failed") })
            .await;
        assert_eq!(out, Err("failed"));
    }

    #[tokio::test]
    async fn bypass_skips_intake() {
        let out: Result<String, ()> = Controller::new((), Label)
            .bypass(|| async { Ok(7u64) })
            .await;
        assert_eq!(out, Ok("value=7".to_string()));
    }
}
