//! Container port for string-keyed argument storage.

use crate::args::Value;

/// A string-keyed heterogeneous store that navigation arguments are written
/// into and read back from.
///
/// Transition payloads and restart-survivable saved state are both
/// implementations of this trait; the codec treats them interchangeably.
pub trait Container {
    /// Returns `true` if the key is present, even when it maps to null.
    fn contains_key(&self, key: &str) -> bool;

    /// Returns the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: Value);

    /// Lists the keys currently stored, sorted.
    fn keys(&self) -> Vec<String>;

    /// Reads a string. Absent, null, or non-string entries read as `None`.
    fn get_string(&self, key: &str) -> Option<String> {
        match self.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Reads an int. Absent or non-int entries read as `0`.
    fn get_int(&self, key: &str) -> i32 {
        match self.get(key) {
            Some(Value::Int(i)) => *i,
            _ => 0,
        }
    }

    /// Reads a bool. Absent or non-bool entries read as `false`.
    fn get_bool(&self, key: &str) -> bool {
        matches!(self.get(key), Some(Value::Bool(true)))
    }

    /// Stores a string, or null when `value` is `None`.
    fn put_string(&mut self, key: &str, value: Option<&str>) {
        self.put(key, value.map_or(Value::Null, Value::from));
    }

    /// Stores an int.
    fn put_int(&mut self, key: &str, value: i32) {
        self.put(key, Value::Int(value));
    }

    /// Stores a bool.
    fn put_bool(&mut self, key: &str, value: bool) {
        self.put(key, Value::Bool(value));
    }
}
