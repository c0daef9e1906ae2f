use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 清单服务的响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResponse {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub checklist: Categories,
}

impl ChecklistResponse {
    pub fn categories(&self) -> &[Category] {
        &self.checklist.0
    }

    pub fn item_count(&self) -> usize {
        self.checklist.0.iter().map(|c| c.items.len()).sum()
    }
}

/// 一个分类及其条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: &[&str]) -> Self {
        Self {
            name: name.into(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 按接收顺序排列的分类表
///
/// JSON 对象的键顺序即展示顺序；重复的键保留首次出现的位置，取最后一次的值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories(pub Vec<Category>);

impl Categories {
    fn insert(&mut self, name: String, items: Vec<String>) {
        match self.0.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.items = items,
            None => self.0.push(Category { name, items }),
        }
    }
}

impl FromIterator<Category> for Categories {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut categories = Categories::default();
        for c in iter {
            categories.insert(c.name, c.items);
        }
        categories
    }
}

impl<'de> Deserialize<'de> for Categories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoriesVisitor;

        impl<'de> Visitor<'de> for CategoriesVisitor {
            type Value = Categories;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from category name to a list of items")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Categories::default();
                while let Some((name, items)) = map.next_entry::<String, Vec<String>>()? {
                    categories.insert(name, items);
                }
                Ok(categories)
            }

            // `"checklist": null` 视为空清单
            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Categories::default())
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Categories::default())
            }
        }

        deserializer.deserialize_any(CategoriesVisitor)
    }
}

impl Serialize for Categories {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}
