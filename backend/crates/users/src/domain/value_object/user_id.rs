use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let user_id = UserId::from_raw(1);
        assert_eq!(user_id.get(), 1);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let user_id = UserId::from_raw(17);
        assert_eq!(serde_json::to_string(&user_id).unwrap(), "17");
    }
}
