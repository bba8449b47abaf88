// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::any::{self, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
struct Entry {
    type_name: &'static str,
    value: Arc<dyn Any + Send + Sync>,
}

/// Immutable, request-scoped bag of values.
///
/// `with_value` never modifies the receiver; it returns a new context that
/// shares the existing entries. Clones are cheap.
#[derive(Clone, Default)]
pub struct Context {
    values: Arc<HashMap<&'static str, Entry>>,
}

impl Context {
    /// An empty context.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_value<V>(&self, key: &'static str, value: V) -> Self
    where
        V: Any + Send + Sync,
    {
        let mut values = (*self.values).clone();
        values.insert(
            key,
            Entry {
                type_name: any::type_name::<V>(),
                value: Arc::new(value),
            },
        );
        Self {
            values: Arc::new(values),
        }
    }

    pub fn value(&self, key: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.values.get(key).map(|entry| entry.value.as_ref())
    }

    /// Name of the type stored under `key`.
    pub fn value_type_name(&self, key: &str) -> Option<&'static str> {
        self.values.get(key).map(|entry| entry.type_name)
    }

    pub fn get<V: Any>(&self, key: &str) -> Option<&V> {
        self.value(key)?.downcast_ref::<V>()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, entry) in self.values.iter() {
            map.entry(key, &entry.type_name);
        }
        map.finish()
    }
}
