pub mod google;
pub mod meta;
pub mod noop;
pub mod tiktok;
pub mod yandex;

pub use google::GoogleTransformer;
pub use meta::MetaTransformer;
pub use noop::NoOpTransformer;
pub use tiktok::TikTokTransformer;
pub use yandex::YandexTransformer;
