//! In-memory user registry

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::{RecordStore, RegistryError, UserRecord};

const NULL_CREDENTIALS_MESSAGE: &str = "username or password is null";

/// Ordered in-memory collection of user records
///
/// Records keep their insertion order and ids are not checked for
/// uniqueness on insert. Deletion is delegated to the configured
/// [`RecordStore`]; the registry never removes records itself.
pub struct UserRegistry {
    users: Vec<UserRecord>,
    store: Option<Arc<dyn RecordStore>>,
}

impl UserRegistry {
    /// Create an empty registry backed by the given record store
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_store(Some(store))
    }

    /// Create an empty registry with no record store configured
    ///
    /// Every [`UserRegistry::delete`] call on such a registry fails with
    /// [`RegistryError::StoreUnavailable`].
    pub fn without_store() -> Self {
        Self::with_store(None)
    }

    /// Create an empty registry with an optional record store
    pub fn with_store(store: Option<Arc<dyn RecordStore>>) -> Self {
        Self {
            users: Vec::new(),
            store,
        }
    }

    /// Append records to the end of the registry, preserving their order
    pub fn add<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = UserRecord>,
    {
        self.users.extend(records);
    }

    /// Live view of all records in insertion order
    pub fn list(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Find the earliest-added record matching both username and password
    pub fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<&UserRecord>, RegistryError> {
        let (Some(username), Some(password)) = (username, password) else {
            return Err(RegistryError::invalid_argument(NULL_CREDENTIALS_MESSAGE));
        };

        Ok(self.users.iter().find(|user| user.matches(username, password)))
    }

    /// Ask the record store to delete a record, returning its answer as-is
    pub fn delete(&self, id: i32) -> Result<bool, RegistryError> {
        let store = self.store.as_ref().ok_or(RegistryError::StoreUnavailable)?;
        store.delete(id)
    }

    /// Build a fresh id-keyed map of the current records
    ///
    /// Fails with [`RegistryError::DuplicateKey`] on the first id seen twice.
    pub fn index_by_id(&self) -> Result<HashMap<i32, &UserRecord>, RegistryError> {
        let mut index = HashMap::with_capacity(self.users.len());

        for user in &self.users {
            match index.entry(user.id()) {
                Entry::Occupied(_) => return Err(RegistryError::duplicate_key(user.id())),
                Entry::Vacant(entry) => {
                    entry.insert(user);
                }
            }
        }

        Ok(index)
    }
}

impl fmt::Debug for UserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRegistry")
            .field("users", &self.users)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockRecordStore;
    use mockall::predicate::eq;

    fn timur() -> UserRecord {
        UserRecord::new(1, "Timur", "123")
    }

    fn dima() -> UserRecord {
        UserRecord::new(2, "Dima", "111")
    }

    fn create_registry() -> UserRegistry {
        UserRegistry::new(Arc::new(MockRecordStore::new()))
    }

    #[test]
    fn test_empty_if_no_user_added() {
        let registry = create_registry();

        assert!(registry.list().is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_preserves_call_and_argument_order() {
        let mut registry = create_registry();

        registry.add([timur(), dima()]);
        registry.add([UserRecord::new(3, "Olga", "xyz")]);
        registry.add(Vec::new());

        let ids: Vec<i32> = registry.list().iter().map(UserRecord::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_add_keeps_duplicates() {
        let mut registry = create_registry();

        registry.add([timur(), timur()]);

        assert_eq!(registry.list(), &[timur(), timur()]);
    }

    #[test]
    fn test_login_success_if_user_exists() {
        let mut registry = create_registry();
        registry.add([timur()]);

        let user = registry.login(Some("Timur"), Some("123")).unwrap();

        assert_eq!(user, Some(&timur()));
    }

    #[test]
    fn test_login_failed_if_password_not_correct() {
        let mut registry = create_registry();
        registry.add([timur()]);

        let user = registry.login(Some("Timur"), Some("dummy")).unwrap();

        assert!(user.is_none());
    }

    #[test]
    fn test_login_failed_if_user_not_exist() {
        let mut registry = create_registry();
        registry.add([timur()]);

        let user = registry.login(Some("dummy"), Some("123")).unwrap();

        assert!(user.is_none());
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let mut registry = create_registry();
        registry.add([timur()]);

        assert!(registry.login(Some("timur"), Some("123")).unwrap().is_none());
    }

    #[test]
    fn test_login_table() {
        let mut registry = create_registry();
        registry.add([timur(), dima()]);

        let cases = [
            ("Timur", "123", Some(timur())),
            ("Dima", "111", Some(dima())),
            ("Dima", "dummy", None),
            ("dummy", "111", None),
            ("ghost", "123", None),
        ];

        for (username, password, expected) in cases {
            let user = registry.login(Some(username), Some(password)).unwrap();
            assert_eq!(user.cloned(), expected, "login({username}, {password})");
        }
    }

    #[test]
    fn test_login_returns_earliest_match() {
        let mut registry = create_registry();
        registry.add([
            UserRecord::new(10, "Timur", "123"),
            UserRecord::new(11, "Timur", "123"),
        ]);

        let user = registry.login(Some("Timur"), Some("123")).unwrap().unwrap();

        assert_eq!(user.id(), 10);
    }

    #[test]
    fn test_login_rejects_missing_credentials() {
        let registry = create_registry();

        let error = registry.login(None, Some("dummy")).unwrap_err();
        assert_eq!(
            error,
            RegistryError::invalid_argument("username or password is null")
        );
        assert_eq!(error.to_string(), "username or password is null");

        let error = registry.login(Some("dummy"), None).unwrap_err();
        assert!(matches!(error, RegistryError::InvalidArgument { .. }));

        assert!(registry.login(None, None).is_err());
    }

    #[test]
    fn test_login_accepts_empty_strings() {
        let mut registry = create_registry();
        registry.add([UserRecord::new(5, "", "")]);

        let user = registry.login(Some(""), Some("")).unwrap();

        assert_eq!(user.map(UserRecord::id), Some(5));
    }

    #[test]
    fn test_index_by_id_empty() {
        let registry = create_registry();

        assert!(registry.index_by_id().unwrap().is_empty());
    }

    #[test]
    fn test_index_by_id() {
        let mut registry = create_registry();
        registry.add([timur(), dima()]);

        let index = registry.index_by_id().unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&1), Some(&&timur()));
        assert_eq!(index.get(&2), Some(&&dima()));
    }

    #[test]
    fn test_index_by_id_rejects_duplicate_ids() {
        let mut registry = create_registry();
        registry.add([timur(), dima(), UserRecord::new(1, "Other", "pw")]);

        let error = registry.index_by_id().unwrap_err();

        assert_eq!(error, RegistryError::DuplicateKey { id: 1 });
    }

    #[test]
    fn test_delete_delegates_to_store() {
        let mut store = MockRecordStore::new();
        store
            .expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let mut registry = UserRegistry::new(Arc::new(store));
        registry.add([timur()]);

        assert!(registry.delete(1).unwrap());
        // records are never removed locally
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_delete_returns_store_false() {
        let mut store = MockRecordStore::new();
        store
            .expect_delete()
            .with(eq(42))
            .times(1)
            .returning(|_| Ok(false));

        let registry = UserRegistry::new(Arc::new(store));

        assert!(!registry.delete(42).unwrap());
    }

    #[test]
    fn test_delete_propagates_store_error() {
        let mut store = MockRecordStore::new();
        store
            .expect_delete()
            .returning(|_| Err(RegistryError::store("connection refused")));

        let registry = UserRegistry::new(Arc::new(store));

        assert_eq!(
            registry.delete(1).unwrap_err(),
            RegistryError::store("connection refused")
        );
    }

    #[test]
    fn test_delete_without_store() {
        let registry = UserRegistry::without_store();

        assert!(!registry.has_store());
        assert_eq!(
            registry.delete(1).unwrap_err(),
            RegistryError::StoreUnavailable
        );
    }
}
