pub const RESOLVE_SCREEN_NAME: &str = "utils.resolveScreenName";
pub const USERS_GET: &str = "users.get";

// Every public field users.get knows about; the server is free to omit
// any of them.
pub const PROFILE_FIELDS: &str = "status,online,sex,interests,counters,verified,banned,\
blacklisted,photo_200,screen_name,is_closed,can_access_closed,followers_count,wall_count,\
photos_count,videos_count,audios_count,notes_count,friends_count,groups_count,career,\
connections,education,universities,schools,relatives,personal,activities,music,movies,tv,\
books,games";

pub fn resolve_query(access_token: &str, version: &str, screen_name: &str) -> Vec<(String, String)> {
    vec![
        ("access_token".to_string(), access_token.to_string()),
        ("v".to_string(), version.to_string()),
        ("screen_name".to_string(), screen_name.to_string()),
    ]
}

pub fn users_get_query(access_token: &str, version: &str, user_id: &str) -> Vec<(String, String)> {
    vec![
        ("access_token".to_string(), access_token.to_string()),
        ("v".to_string(), version.to_string()),
        ("user_ids".to_string(), user_id.to_string()),
        ("fields".to_string(), PROFILE_FIELDS.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_get_query_carries_the_fixed_field_list() {
        let query = users_get_query("tok", "5.131", "42");
        assert_eq!(query[2], ("user_ids".to_string(), "42".to_string()));
        let fields = &query[3].1;
        assert!(fields.contains("counters"));
        assert!(fields.contains("universities"));
        assert!(!fields.contains(' '));
    }

    #[test]
    fn resolve_query_carries_the_screen_name() {
        let query = resolve_query("tok", "5.131", "someuser");
        assert_eq!(query[2], ("screen_name".to_string(), "someuser".to_string()));
    }
}
