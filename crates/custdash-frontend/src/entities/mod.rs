use gpui::Entity;

pub mod notifications_entity;
pub mod settings_entity;
pub mod user_detail_entity;
pub mod users_entity;

#[derive(Debug, Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub users: Entity<users_entity::UsersEntity>,
    pub user_detail: Entity<user_detail_entity::UserDetailEntity>,
    pub notifications: Entity<notifications_entity::NotificationsEntity>,
}
