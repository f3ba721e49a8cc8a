use error_stack::Report;
use kernel::interface::notify::{DependOnNotificationPublisher, NotificationPublisher};
use kernel::interface::query::{CartQuery, DependOnCartQuery};
use kernel::interface::update::{CartModifier, DependOnCartModifier};
use kernel::prelude::entity::{Cart, CartId, Notification};
use kernel::KernelError;
use tracing::info;
use uuid::Uuid;

use crate::transfer::{AddToCartDto, CartDto, CheckoutDto, GetCartDto, RemoveFromCartDto};

#[async_trait::async_trait]
pub trait CartService:
    'static
    + Sync
    + Send
    + DependOnCartQuery
    + DependOnCartModifier
    + DependOnNotificationPublisher
{
    async fn create_cart(&self) -> error_stack::Result<CartDto, KernelError> {
        let cart = Cart::new(CartId::new(Uuid::new_v4()));
        self.cart_modifier().create(&cart).await?;
        Ok(CartDto::from(cart))
    }

    async fn get_cart(&self, dto: GetCartDto) -> error_stack::Result<Option<CartDto>, KernelError> {
        let cart = self.cart_query().find_by_id(&CartId::new(dto.id)).await?;
        Ok(cart.map(CartDto::from))
    }

    async fn add_to_cart(&self, dto: AddToCartDto) -> error_stack::Result<CartDto, KernelError> {
        let title = dto.book.title().clone();
        let book = dto.book;
        let cart = self
            .cart_modifier()
            .modify(&CartId::new(dto.id), move |cart| {
                cart.add(book);
                cart.clone()
            })
            .await?;

        self.notification_publisher()
            .publish(Notification::AddedToCart {
                cart: *cart.id(),
                title,
            });
        Ok(CartDto::from(cart))
    }

    async fn remove_from_cart(
        &self,
        dto: RemoveFromCartDto,
    ) -> error_stack::Result<CartDto, KernelError> {
        let index = dto.index;
        let (removed, cart) = self
            .cart_modifier()
            .modify(&CartId::new(dto.id), move |cart| {
                (cart.remove(index), cart.clone())
            })
            .await?;
        if removed.is_none() {
            return Err(Report::new(KernelError::InvalidInput).attach_printable(format!(
                "Cart has {} entries, cannot remove position {}",
                cart.len(),
                index
            )));
        }
        Ok(CartDto::from(cart))
    }

    async fn clear_cart(&self, dto: GetCartDto) -> error_stack::Result<CartDto, KernelError> {
        let cart = self
            .cart_modifier()
            .modify(&CartId::new(dto.id), |cart| {
                cart.clear();
                cart.clone()
            })
            .await?;
        Ok(CartDto::from(cart))
    }

    /// Simulated purchase: announces the bought titles and empties the cart.
    /// An empty cart is rejected with a notification rather than an error.
    async fn checkout(&self, dto: GetCartDto) -> error_stack::Result<CheckoutDto, KernelError> {
        let id = CartId::new(dto.id);
        let purchase = self
            .cart_modifier()
            .modify(&id, |cart| {
                if cart.is_empty() {
                    return None;
                }
                let titles = cart.titles();
                let total = cart.total();
                cart.clear();
                Some((titles, total))
            })
            .await?;

        let Some((titles, total)) = purchase else {
            self.notification_publisher()
                .publish(Notification::CheckoutRejected { cart: id });
            return Ok(CheckoutDto::Rejected);
        };

        info!(cart = ?id, items = titles.len(), total, "checkout completed");
        self.notification_publisher()
            .publish(Notification::CheckoutCompleted {
                cart: id,
                titles: titles.clone(),
                total,
            });
        Ok(CheckoutDto::Completed { titles, total })
    }

    async fn delete_cart(&self, dto: GetCartDto) -> error_stack::Result<(), KernelError> {
        self.cart_modifier().delete(&CartId::new(dto.id)).await
    }
}

impl<T> CartService for T where
    T: DependOnCartQuery + DependOnCartModifier + DependOnNotificationPublisher
{
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use error_stack::Report;
    use kernel::interface::notify::{DependOnNotificationPublisher, NotificationPublisher};
    use kernel::interface::query::{CartQuery, DependOnCartQuery};
    use kernel::interface::update::{CartModifier, DependOnCartModifier};
    use kernel::prelude::entity::{
        BookAuthor, BookDescription, BookId, BookPrice, BookRating, BookRecord, BookTitle, Cart,
        CartId, Category, Notification,
    };
    use kernel::KernelError;

    use super::CartService;
    use crate::transfer::{AddToCartDto, CheckoutDto, GetCartDto, RemoveFromCartDto};

    #[derive(Default)]
    struct TestModule {
        carts: Mutex<HashMap<CartId, Cart>>,
        sent: Mutex<Vec<Notification>>,
    }

    impl TestModule {
        fn sent(&self) -> Vec<Notification> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CartQuery for TestModule {
        async fn find_by_id(&self, id: &CartId) -> error_stack::Result<Option<Cart>, KernelError> {
            Ok(self.carts.lock().unwrap().get(id).cloned())
        }
    }

    #[async_trait::async_trait]
    impl CartModifier for TestModule {
        async fn create(&self, cart: &Cart) -> error_stack::Result<(), KernelError> {
            self.carts.lock().unwrap().insert(*cart.id(), cart.clone());
            Ok(())
        }

        async fn modify<F, R>(&self, id: &CartId, f: F) -> error_stack::Result<R, KernelError>
        where
            F: FnOnce(&mut Cart) -> R + Send,
            R: Send,
        {
            let mut carts = self.carts.lock().unwrap();
            let cart = carts
                .get_mut(id)
                .ok_or_else(|| Report::new(KernelError::NotFound))?;
            Ok(f(cart))
        }

        async fn delete(&self, id: &CartId) -> error_stack::Result<(), KernelError> {
            self.carts
                .lock()
                .unwrap()
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| Report::new(KernelError::NotFound))
        }
    }

    impl NotificationPublisher for TestModule {
        fn publish(&self, notification: Notification) {
            self.sent.lock().unwrap().push(notification);
        }
    }

    impl DependOnCartQuery for TestModule {
        type CartQuery = Self;
        fn cart_query(&self) -> &Self::CartQuery {
            self
        }
    }

    impl DependOnCartModifier for TestModule {
        type CartModifier = Self;
        fn cart_modifier(&self) -> &Self::CartModifier {
            self
        }
    }

    impl DependOnNotificationPublisher for TestModule {
        type NotificationPublisher = Self;
        fn notification_publisher(&self) -> &Self::NotificationPublisher {
            self
        }
    }

    fn book(id: &str, title: &str, price: u32) -> BookRecord {
        BookRecord::new(
            BookId::new(id),
            BookTitle::new(title),
            BookAuthor::new("Andrea Hirata"),
            BookPrice::new(price),
            Category::Fiction,
            BookDescription::default(),
            BookRating::from_tenths(48),
            None,
            None,
        )
    }

    #[tokio::test]
    async fn add_remove_and_total() -> error_stack::Result<(), KernelError> {
        let module = TestModule::default();
        let cart = module.create_cart().await?;

        module
            .add_to_cart(AddToCartDto {
                id: cart.id,
                book: book("1", "Laskar Pelangi", 85_000),
            })
            .await?;
        let cart = module
            .add_to_cart(AddToCartDto {
                id: cart.id,
                book: book("2", "Bumi Manusia", 95_000),
            })
            .await?;
        assert_eq!(cart.total, 180_000);

        let cart = module
            .remove_from_cart(RemoveFromCartDto {
                id: cart.id,
                index: 0,
            })
            .await?;
        assert_eq!(cart.entries.len(), 1);
        assert_eq!(cart.entries[0].title(), &BookTitle::new("Bumi Manusia"));

        let out_of_range = module
            .remove_from_cart(RemoveFromCartDto {
                id: cart.id,
                index: 3,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            out_of_range.current_context(),
            KernelError::InvalidInput
        ));

        assert_eq!(
            module.sent()[0],
            Notification::AddedToCart {
                cart: CartId::new(cart.id),
                title: BookTitle::new("Laskar Pelangi"),
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn same_book_twice_is_two_entries() -> error_stack::Result<(), KernelError> {
        let module = TestModule::default();
        let cart = module.create_cart().await?;
        let laskar = book("1", "Laskar Pelangi", 85_000);
        for _ in 0..2 {
            module
                .add_to_cart(AddToCartDto {
                    id: cart.id,
                    book: laskar.clone(),
                })
                .await?;
        }

        let cart = module
            .get_cart(GetCartDto { id: cart.id })
            .await?
            .unwrap();
        assert_eq!(cart.entries, vec![laskar.clone(), laskar]);
        assert_eq!(cart.total, 170_000);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_are_all_kept() -> error_stack::Result<(), KernelError> {
        let module = Arc::new(TestModule::default());
        let id = module.create_cart().await?.id;

        let tasks = (0..16)
            .map(|n| {
                let module = Arc::clone(&module);
                tokio::spawn(async move {
                    module
                        .add_to_cart(AddToCartDto {
                            id,
                            book: book(&n.to_string(), "Bumi", 90_000),
                        })
                        .await
                })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.unwrap()?;
        }

        let found = module.get_cart(GetCartDto { id }).await?.unwrap();
        assert_eq!(found.entries.len(), 16);
        assert_eq!(module.sent().len(), 16);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_checkouts_complete_once() -> error_stack::Result<(), KernelError> {
        let module = Arc::new(TestModule::default());
        let id = module.create_cart().await?.id;
        module
            .add_to_cart(AddToCartDto {
                id,
                book: book("1", "Laskar Pelangi", 85_000),
            })
            .await?;

        let tasks = (0..4)
            .map(|_| {
                let module = Arc::clone(&module);
                tokio::spawn(async move { module.checkout(GetCartDto { id }).await })
            })
            .collect::<Vec<_>>();
        let mut completed = 0;
        for task in tasks {
            if let CheckoutDto::Completed { .. } = task.await.unwrap()? {
                completed += 1;
            }
        }
        assert_eq!(completed, 1);
        Ok(())
    }

    #[tokio::test]
    async fn checkout_clears_and_notifies() -> error_stack::Result<(), KernelError> {
        let module = TestModule::default();
        let cart = module.create_cart().await?;

        let rejected = module.checkout(GetCartDto { id: cart.id }).await?;
        assert_eq!(rejected, CheckoutDto::Rejected);

        module
            .add_to_cart(AddToCartDto {
                id: cart.id,
                book: book("1", "Laskar Pelangi", 85_000),
            })
            .await?;
        let completed = module.checkout(GetCartDto { id: cart.id }).await?;
        assert_eq!(
            completed,
            CheckoutDto::Completed {
                titles: vec![BookTitle::new("Laskar Pelangi")],
                total: 85_000,
            }
        );

        let cart = module
            .get_cart(GetCartDto { id: cart.id })
            .await?
            .unwrap();
        assert!(cart.entries.is_empty());

        let sent = module.sent();
        assert_eq!(sent.len(), 3);
        assert!(matches!(sent[0], Notification::CheckoutRejected { .. }));
        assert!(matches!(
            sent[2],
            Notification::CheckoutCompleted { total: 85_000, .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn missing_cart_is_not_found() {
        let module = TestModule::default();
        let report = module
            .clear_cart(GetCartDto {
                id: uuid::Uuid::new_v4(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }
}
