use std::collections::HashMap;

use tracing::trace;

/// Resolves uids and gids to names, once per id for the whole run.
///
/// An id with no passwd/group entry renders as its number.
#[derive(Debug, Default)]
pub struct IdentityCache {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl IdentityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&mut self, uid: u32) -> &str {
        self.users.entry(uid).or_insert_with(|| {
            uzers::get_user_by_uid(uid)
                .map(|u| u.name().to_string_lossy().into_owned())
                .unwrap_or_else(|| {
                    trace!(uid, "no user entry, falling back to numeric id");
                    uid.to_string()
                })
        })
    }

    pub fn group_name(&mut self, gid: u32) -> &str {
        self.groups.entry(gid).or_insert_with(|| {
            uzers::get_group_by_gid(gid)
                .map(|g| g.name().to_string_lossy().into_owned())
                .unwrap_or_else(|| {
                    trace!(gid, "no group entry, falling back to numeric id");
                    gid.to_string()
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNKNOWN_ID: u32 = 3_999_999_001;

    #[test]
    fn test_unknown_ids_fall_back_to_numbers() {
        let mut cache = IdentityCache::new();
        assert_eq!(cache.user_name(UNKNOWN_ID), "3999999001");
        assert_eq!(cache.group_name(UNKNOWN_ID), "3999999001");
    }

    #[test]
    fn test_current_user_resolves_like_uzers() {
        let uid = uzers::get_current_uid();
        let expected = uzers::get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string());

        let mut cache = IdentityCache::new();
        assert_eq!(cache.user_name(uid), expected);
        // second call is served from the cache
        assert_eq!(cache.user_name(uid), expected);
        assert_eq!(cache.users.len(), 1);
    }
}
