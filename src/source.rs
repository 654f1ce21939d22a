use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    color::*,
    error::*,
    table::*
};

impl ColorTable {
    pub fn from_json(src: &str) -> serde_json::Result<ColorTable> {
        serde_json::from_str(src)
    }

    pub fn from_ron(src: &str) -> ron::error::SpannedResult<ColorTable> {
        ron::from_str(src)
    }

    pub fn from_yaml(src: &str) -> Result<ColorTable, serde_yaml::Error> {
        serde_yaml::from_str(src)
    }

    /// Loads a table description, choosing the format from the file extension.
    ///
    /// A table without a name is named after the file stem.
    pub fn from_file(path: impl AsRef<Path>) -> Result<ColorTable, TableError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = match path.extension().ok_or(TableError::ExtensionError)?.to_str() {
            Some("json") => ColorTable::from_json(&contents)?,
            Some("ron") => ColorTable::from_ron(&contents)?,
            Some("yaml" | "yml") => ColorTable::from_yaml(&contents)?,
            _ => return Err(TableError::ExtensionError)
        };

        if table.name().is_none() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                return Ok(table.with_name(stem));
            }
        }

        Ok(table)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub(crate) use self::_serde::TableSource;

mod _serde {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename="ColorTable")]
    pub struct TableSource {
        #[serde(default, skip_serializing_if="Option::is_none")]
        pub name: Option<String>,
        #[serde(default)]
        pub encoding: Encoding,
        pub colors: Vec<[f64; 3]>,
        #[serde(default, skip_serializing_if="Option::is_none")]
        pub positions: Option<Vec<f64>>,
        #[serde(default, skip_serializing_if="Option::is_none")]
        pub under: Option<[f64; 3]>,
        #[serde(default, skip_serializing_if="Option::is_none")]
        pub over: Option<[f64; 3]>,
        #[serde(default, skip_serializing_if="Option::is_none")]
        pub bad: Option<[f64; 3]>,
    }

    fn extreme(
        kind: &'static str,
        channels: Option<[f64; 3]>,
        encoding: Encoding
    ) -> Result<Option<Color>, InvalidSpec> {
        channels
            .map(|c| Color::decode(c, encoding)
                .map_err(|value| InvalidSpec::ExtremeOutOfRange { kind, value, encoding }))
            .transpose()
    }

    impl TryFrom<TableSource> for ColorTable {
        type Error = InvalidSpec;

        fn try_from(src: TableSource) -> Result<Self, Self::Error> {
            let table = ColorTable::build(src.colors, src.positions, src.encoding)?;
            let extremes = Extremes {
                under: extreme("under", src.under, src.encoding)?,
                over: extreme("over", src.over, src.encoding)?,
                bad: extreme("bad", src.bad, src.encoding)?,
            };
            let table = table.with_extremes(extremes);

            Ok(match src.name {
                Some(name) => table.with_name(name),
                None => table,
            })
        }
    }

    impl From<ColorTable> for TableSource {
        fn from(table: ColorTable) -> Self {
            let extremes = table.extremes();
            TableSource {
                name: table.name().map(str::to_owned),
                encoding: Encoding::Arithmetic,
                colors: table.colors().iter().map(Color::channels).collect(),
                positions: Some(table.positions().to_vec()),
                under: extremes.under.map(Into::into),
                over: extremes.over.map(Into::into),
                bad: extremes.bad.map(Into::into),
            }
        }
    }
}
