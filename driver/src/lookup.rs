mod google;

pub use self::google::*;
