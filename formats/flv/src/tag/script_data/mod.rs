use std::fmt;

pub mod reader;

pub(crate) const STRING_MARKER: u8 = 0x02;
pub(crate) const OBJECT_MARKER: u8 = 0x03;
pub(crate) const ECMA_ARRAY_MARKER: u8 = 0x08;

pub(crate) const NUMBER_VALUE: u8 = 0;
pub(crate) const BOOLEAN_VALUE: u8 = 1;
pub(crate) const STRING_VALUE: u8 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Number(f64),
    Boolean(bool),
    String(String),
}

impl ScriptValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{}", v),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::String(v) => write!(f, "{:?}", v),
        }
    }
}

/// Decoded script tag, typically `onMetaData`.
///
/// Entries keep the order they were first seen in. A key that shows up again
/// overwrites the earlier value but stays in its original position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptData {
    pub name: String,
    /// Declared element count when the container is an ECMA array.
    pub count: Option<u32>,
    values: Vec<(String, ScriptValue)>,
}

impl ScriptData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            count: None,
            values: Vec::new(),
        }
    }

    /// Returns the replaced value if the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: ScriptValue) -> Option<ScriptValue> {
        let key = key.into();
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.values.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ScriptValue> {
        self.values.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ScriptValue::as_number)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ScriptValue::as_bool)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ScriptValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScriptValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
