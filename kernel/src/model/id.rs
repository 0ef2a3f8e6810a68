use serde::{Deserialize, Serialize};
use uuid::Uuid;

// エンティティごとの ID 型を定義するマクロ
// ID は不透明な文字列（UUID v4 のテキスト表現）として扱う
macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<String> for $id_type {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(TaskId);
define_id!(NotificationId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_unique() {
        assert_ne!(TaskId::new(), TaskId::new());
        assert_ne!(NotificationId::new(), NotificationId::new());
    }
}
