pub mod detail_item;
pub mod toast_layer;
pub mod user_detail;
pub mod user_posts;
