use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum ListItem<T> {
    Value(T),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<ListItem<T>>),
    One(ListItem<T>),
}

/// Accepts a sequence, a lone scalar or comma split env text. Blank items
/// are dropped, so an empty env var means an empty list.
pub fn deserialize_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    let items = match OneOrMany::<T>::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            ListItem::Value(value) => Some(Ok(value)),
            ListItem::Text(text) if text.trim().is_empty() => None,
            ListItem::Text(text) => Some(text.trim().parse().map_err(de::Error::custom)),
        })
        .collect()
}
