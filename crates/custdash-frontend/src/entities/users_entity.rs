use custdash_bridge::{
    api_error::ApiError,
    user::{NewUser, User},
};
use gpui::{AppContext, Entity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// The customer list shown on the overview page, including customers created
/// locally during this session.
#[derive(Debug, Clone, Default)]
pub struct UsersEntity {
    pub state: LoadState,
    pub users: Vec<User>,
}

impl UsersEntity {
    /// Stores the result of a list fetch. A failed fetch keeps the rows that
    /// are already shown.
    pub fn apply_response(&mut self, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => {
                self.users = users;
                self.state = LoadState::Loaded;
            }
            Err(e) => self.state = LoadState::Failed(e.message),
        }
    }

    /// Id for the next locally created customer: one past the largest known id.
    pub fn next_local_id(&self) -> u64 {
        self.users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }

    /// Appends a customer built from a create-form submission and returns it.
    pub fn append_created(&mut self, record: NewUser) -> User {
        let user = record.into_user(self.next_local_id());
        self.users.push(user.clone());
        user
    }

    pub fn update<C: AppContext>(
        entity: &Entity<Self>,
        result: Result<Vec<User>, ApiError>,
        cx: &mut C,
    ) {
        entity.update(cx, |this, cx| {
            this.apply_response(result);
            cx.notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_owned(),
            ..User::default()
        }
    }

    fn record(name: &str) -> NewUser {
        NewUser {
            name: name.to_owned(),
            email: format!("{}@test.com", name.to_lowercase()),
            company: "Acme".to_owned(),
        }
    }

    #[test]
    fn first_local_id_on_empty_list_is_one() {
        let mut users = UsersEntity::default();
        assert_eq!(users.append_created(record("Ana")).id, 1);
        assert_eq!(users.append_created(record("Bea")).id, 2);
    }

    #[test]
    fn local_ids_continue_after_remote_ones() {
        let mut users = UsersEntity::default();
        users.apply_response(Ok(vec![user(1, "Leanne"), user(10, "Clementina")]));

        let created = users.append_created(record("Ana"));
        assert_eq!(created.id, 11);
        assert_eq!(created.company.name, "Acme");
        assert_eq!(users.users.last(), Some(&created));
        assert_eq!(users.state, LoadState::Loaded);
    }

    #[test]
    fn failed_fetch_keeps_existing_rows() {
        let mut users = UsersEntity::default();
        users.apply_response(Ok(vec![user(1, "Leanne")]));
        users.apply_response(Err(ApiError {
            message: "request failed with status code 500".to_owned(),
            status: 500,
            data: None,
        }));

        assert_eq!(
            users.state,
            LoadState::Failed("request failed with status code 500".to_owned())
        );
        assert_eq!(users.users.len(), 1);
    }

    #[test]
    fn reload_replaces_rows() {
        let mut users = UsersEntity::default();
        users.apply_response(Ok(vec![user(1, "Leanne")]));
        users.append_created(record("Ana"));

        users.apply_response(Ok(vec![user(1, "Leanne"), user(2, "Ervin")]));

        let names: Vec<_> = users.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Leanne", "Ervin"]);
    }
}
