use crate::constants::WILDCARD;
use indexmap::IndexSet;

/// Origins a [`CorsMiddleware`](crate::CorsMiddleware) accepts.
///
/// The wildcard is tracked as a flag next to the concrete origins, so adding
/// or removing `"*"` never discards the origins recorded alongside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<String>", into = "Vec<String>"))]
pub struct AllowedOrigins {
    any: bool,
    values: IndexSet<String>,
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self {
            any: true,
            values: IndexSet::new(),
        }
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut origins = Self::default();
        origins.extend(values);
        origins
    }

    pub fn is_any(&self) -> bool {
        self.any
    }

    /// Adds an origin. `"*"` sets the wildcard flag; anything else is recorded
    /// even while the wildcard is set.
    pub fn insert<S: Into<String>>(&mut self, origin: S) {
        let origin = origin.into();
        if origin == WILDCARD {
            self.any = true;
        } else {
            self.values.insert(origin);
        }
    }

    pub fn extend<I, S>(&mut self, origins: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for origin in origins {
            self.insert(origin);
        }
    }

    /// Removes an origin. Removing `"*"` clears only the wildcard flag.
    pub fn remove(&mut self, origin: &str) {
        if origin == WILDCARD {
            self.any = false;
        } else {
            self.values.shift_remove(origin);
        }
    }

    pub fn clear(&mut self) {
        self.any = false;
        self.values.clear();
    }

    /// Exact, case-sensitive membership. An empty origin always matches.
    pub fn allows(&self, origin: &str) -> bool {
        origin.is_empty() || self.any || self.values.contains(origin)
    }

    /// Value for `Access-Control-Allow-Origin`, or `None` to omit the header.
    pub fn header_value(&self, request_origin: &str) -> Option<String> {
        if self.any {
            Some(WILDCARD.to_string())
        } else if request_origin.is_empty() {
            None
        } else {
            Some(request_origin.to_string())
        }
    }

    /// Concrete origins in insertion order; the wildcard is not included.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter().map(String::as_str)
    }

    /// Number of entries, counting the wildcard as one.
    pub fn len(&self) -> usize {
        self.values.len() + usize::from(self.any)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for AllowedOrigins {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

impl From<AllowedOrigins> for Vec<String> {
    fn from(origins: AllowedOrigins) -> Self {
        let wildcard = origins.any.then(|| WILDCARD.to_string());
        wildcard.into_iter().chain(origins.values).collect()
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
