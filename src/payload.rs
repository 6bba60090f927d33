//! Request Payloads
//!
//! Ordered name/value pairs built from DOM state at click time, encoded the
//! way jQuery encodes `$.ajax({data: {...}})`.

use crate::error::ActionResult;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPayload {
    pairs: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Object-style assignment: an existing name keeps its position and takes
    /// the new value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((name, value)),
        }
    }

    pub fn set_flag(&mut self, name: impl Into<String>, flag: bool) {
        self.set(name, if flag { "true" } else { "false" });
    }

    /// Arrays go out as repeated `name[]` keys; an empty list sends nothing
    pub fn push_list<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = format!("{}[]", name);
        for value in values {
            self.pairs.push((key.clone(), value.into()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` body
    pub fn encode(&self) -> ActionResult<String> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

/// Body of the admin availability / staff toggles
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkToggle {
    /// State of the deletion-mode checkbox; the staff toggle sends none
    pub flag: Option<bool>,
    /// Ids of the rows on the current page, in document order
    pub elements: Vec<String>,
}

impl BulkToggle {
    pub fn to_payload(&self) -> FormPayload {
        let mut payload = FormPayload::new();
        if let Some(flag) = self.flag {
            payload.set_flag("flag", flag);
        }
        payload.push_list("elements", self.elements.iter().cloned());
        payload
    }
}
