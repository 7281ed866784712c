use serde::{Deserialize, Serialize};

/// Geographic coordinates attached to an address, as strings the way the
/// remote source sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

/// Postal address of a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Company a customer works for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A customer record as served by the remote data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// Payload of a successful create-customer submission. All fields are trimmed
/// and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl NewUser {
    /// Builds a locally-constructed customer record with the given id. Fields
    /// the form does not collect are left empty.
    pub fn into_user(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            company: Company {
                name: self.company,
                ..Company::default()
            },
            ..User::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_remote_user() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(raw).expect("user should deserialize");
        assert_eq!(user.username, "Bret");
        assert_eq!(user.address.geo.lng, "81.1496");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn sparse_user_fills_defaults() {
        let user: User = serde_json::from_str(r#"{"id": 11, "name": "Ana"}"#)
            .expect("sparse user should deserialize");
        assert_eq!(user.id, 11);
        assert_eq!(user.company, Company::default());
    }

    #[test]
    fn new_user_becomes_local_record() {
        let user = NewUser {
            name: "Ana".to_owned(),
            email: "ana@test.com".to_owned(),
            company: "Acme".to_owned(),
        }
        .into_user(11);

        assert_eq!(user.id, 11);
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@test.com");
        assert_eq!(user.company.name, "Acme");
        assert_eq!(user.username, "");
    }
}
