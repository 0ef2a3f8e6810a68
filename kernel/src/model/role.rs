use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "title_case")]
pub enum Role {
    Admin,
    TeamLeader,
    Member,
}

impl Role {
    // タスクの全件閲覧が許可されたロールかどうか
    // 権限はロールの値のみで決まり、タスクの所有関係には依存しない
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::Admin | Role::TeamLeader)
    }
}
