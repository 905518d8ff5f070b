//! Simple, general-purpose, hierarchical configuration.
//!
//! Configuration *value*s are generally referred to using a *path* of *name*s
//! (slice of strings), each of which walks a level down the hierarchy of
//! *section*s.  For example, `&["webserver", "server", "port"]`.
//!
//! Configuration paths are case-insensitive.
//!
//! A [`Config`] implementation may or may not allow a value and a section to
//! exist at the same path.
//!
//! All configuration values are strings.

pub mod parse;
pub mod validate;

pub trait ValueParser<T>: std::fmt::Debug {
    fn parse(&self, value: &str) -> Result<T, String>;
}

pub trait ValueValidator<T>: std::fmt::Debug {
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Everything needed to read a configuration value.
#[derive(Clone, Debug)]
pub struct ValueRef<'a, T> {
    /// Path to read the value from.
    pub names: &'a [&'a str],
    /// Default to use when there is no value at the path.  Ignored by
    /// [`get_opt_ref`].
    pub def: &'a str,
    pub type_: &'a dyn ValueParser<T>,
    pub validators: &'a [&'a dyn ValueValidator<T>],
}

/// Read configuration values.
pub trait Config {
    /// Get the value at the path given by `names`, if there is one.
    fn get_opt(&self, names: &[&str]) -> Option<&str>;

    /// Get the value at the path given by `names`, or the default `def`.
    fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str {
        self.get_opt(names).unwrap_or(def)
    }
}

fn parse_ref<T>(raw: &str, vref: &ValueRef<T>) -> Result<T, String> {
    let parsed = vref.type_.parse(raw)
        .map_err(|e| format!("invalid configuration value ({}): {e}",
                             vref.names.join(".")))?;
    for val in vref.validators {
        val.validate(&parsed)
            .map_err(|e| format!("invalid configuration value ({}): {e}",
                                 vref.names.join(".")))?;
    }
    Ok(parsed)
}

/// Get a value using a [reference](ValueRef).
pub fn get_ref<C, T>(config: &C, vref: &ValueRef<T>) -> Result<T, String>
where
    C: Config + ?Sized,
{
    parse_ref(config.get(vref.names, vref.def), vref)
}

/// Get a value using a [reference](ValueRef), without falling back to its
/// default: a missing value is `None`.
pub fn get_opt_ref<C, T>(config: &C, vref: &ValueRef<T>)
-> Result<Option<T>, String>
where
    C: Config + ?Sized,
{
    config.get_opt(vref.names)
        .map(|raw| parse_ref(raw, vref))
        .transpose()
}

/// Implementation of [`Config`] using an in-memory map.
///
/// A value and a section may not exist at the same path.
///
/// When multiple values have equivalent paths (because paths are
/// case-insensitive), reading the value at the path will always return the same
/// value, but there is no defined scheme for how this value is chosen.
pub mod map {
    use std::collections::HashMap;

    /// A value or a section.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum Entry {
        Value(String),
        Section(HashMap<String, Entry>),
    }

    impl Entry {
        fn get_opt(&self, names: &[&str]) -> Option<&str> {
            match (names.split_first(), self) {
                (Some((first_name, other_names)), Entry::Section(section)) => {
                    section.get(&first_name.to_ascii_lowercase())
                        .and_then(|entry| entry.get_opt(other_names))
                }
                (None, Entry::Value(value)) => Some(value),
                _ => None,
            }
        }
    }

    /// Implementation of [`Config`](super::Config) using an in-memory map.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        cfg: Entry,
    }

    impl super::Config for Config {
        fn get_opt(&self, names: &[&str]) -> Option<&str> {
            self.cfg.get_opt(names)
        }
    }

    /// Copy an entry and lowercase its keys.
    fn normalise(entry: &Entry) -> Entry {
        match entry {
            Entry::Value(v) => Entry::Value(v.to_owned()),
            Entry::Section(m) => {
                let m: HashMap<String, Entry> = m.iter()
                    .map(|(k, v)| (k.to_lowercase(), normalise(v)))
                    .collect();
                Entry::Section(m)
            }
        }
    }

    /// Construct a config from a hierarchical map.
    pub fn new(cfg: HashMap<String, Entry>) -> Config {
        Config { cfg: normalise(&Entry::Section(cfg)) }
    }

    /// Construct a config from `(path, value)` pairs, where paths are
    /// `.`-separated.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let mut root = HashMap::new();
        for (path, value) in pairs {
            let names: Vec<&str> = path.split('.').collect();
            insert(&mut root, &names, value);
        }
        new(root)
    }

    fn insert(section: &mut HashMap<String, Entry>, names: &[&str], value: &str) {
        match names.split_first() {
            Some((name, [])) => {
                section.insert(name.to_string(), Entry::Value(value.to_owned()));
            }
            Some((name, rest)) => {
                let entry = section.entry(name.to_string())
                    .or_insert_with(|| Entry::Section(HashMap::new()));
                if let Entry::Value(_) = entry {
                    *entry = Entry::Section(HashMap::new());
                }
                if let Entry::Section(child) = entry {
                    insert(child, rest, value);
                }
            }
            None => {}
        }
    }
}

/// Implementation of [`Config`] using the process's environment variables.
///
/// - The configuration values become fixed at the time of construction.
/// - If reading an environment variable fails, it is ignored.
/// - Path names are separated using `_` characters.
/// - A value and a section may exist at the same path.
/// - When reading a value, `-` characters in path names will match `_`
///   characters in environment variable names.
pub mod env {
    use std::collections::HashMap;

    /// Implementation of [`Config`](super::Config) using the process's
    /// environment variables.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        prefix: String,
        env: HashMap<String, String>,
    }

    impl Config {
        /// The environment variable name a path is read from.
        pub fn var_name(&self, names: &[&str]) -> String {
            let mapped_names: Vec<String> = names.iter().map(|name| {
                name.to_ascii_uppercase().replace('-', "_")
            }).collect();
            self.prefix.to_owned() + &mapped_names.join("_")
        }
    }

    impl super::Config for Config {
        fn get_opt(&self, names: &[&str]) -> Option<&str> {
            self.env.get(&self.var_name(names)).map(String::as_str)
        }
    }

    /// Construct a config from the current process environment.
    ///
    /// Only environment variables starting with `prefix` are included, and
    /// `prefix` is removed when reading values.
    pub fn new(prefix: String) -> Config {
        let mut env = HashMap::new();
        for (name_os, val_os) in std::env::vars_os() {
            if let (Ok(name), Ok(val)) =
                (name_os.into_string(), val_os.into_string())
            {
                if name.starts_with(&prefix) {
                    env.insert(name, val);
                }
            }
        }
        Config { prefix, env }
    }
}

/// Implementation of [`Config`] using a YAML file.
///
/// A value and a section may not exist at the same path.
///
/// When multiple values have equivalent paths (because paths are
/// case-insensitive), the last matching value in the file is returned.
pub mod file {
    use std::{fs::File, path::Path};
    use super::map::{self, Entry};
    use serde_yaml::Value;

    fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.to_owned()),
            _ => None,
        }
    }

    /// `None` for nulls, which count as unset.
    ///
    /// A sequence of scalars becomes a single comma-separated value, the form
    /// read by [`LIST`](super::parse::LIST).  Any other sequence becomes a
    /// section keyed by index.
    fn parse(value: &Value) -> Option<Entry> {
        match value {
            Value::Null => None,
            Value::Sequence(s) => {
                let items: Vec<&Value> = s.iter()
                    .filter(|v| !v.is_null())
                    .collect();
                let scalars: Option<Vec<String>> =
                    items.iter().map(|v| scalar(v)).collect();
                match scalars {
                    Some(scalars) => Some(Entry::Value(scalars.join(","))),
                    None => Some(Entry::Section(items.iter()
                        .enumerate()
                        .filter_map(|(i, v)| parse(v).map(|e| (i.to_string(), e)))
                        .collect())),
                }
            }
            Value::Mapping(m) => {
                Some(Entry::Section(m.iter()
                    .filter_map(|(k, v)| {
                        k.as_str().zip(parse(v))
                            .map(|(k_str, entry)| (k_str.to_owned(), entry))
                    })
                    .collect()))
            }
            Value::Tagged(_) => None,
            _ => scalar(value).map(Entry::Value),
        }
    }

    /// Construct a config from a YAML string.
    pub fn from_str(yaml: &str) -> Result<map::Config, String> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| format!("error parsing config: {e}"))?;
        from_value(&value)
    }

    fn from_value(value: &Value) -> Result<map::Config, String> {
        match parse(value) {
            Some(Entry::Section(e)) => Ok(map::new(e)),
            None => Ok(map::new(Default::default())),
            Some(Entry::Value(_)) =>
                Err("invalid config file: top-level must be a map".to_owned()),
        }
    }

    /// Construct a config from a YAML file.
    pub fn new<P>(path: P) -> Result<map::Config, String>
    where
        P: AsRef<Path> + core::fmt::Debug
    {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("error opening file ({path:?}): {e}"))?;
        let value: Value = serde_yaml::from_reader(file)
            .map_err(|e| format!(
                "error loading config from file ({path:?}): {e}"))?;
        from_value(&value)
    }
}

/// Implementation of [`Config`] that reads from several configs in order.
///
/// The first config with a value at a path provides it.
pub mod layered {
    pub struct Config {
        layers: Vec<Box<dyn super::Config>>,
    }

    impl super::Config for Config {
        fn get_opt(&self, names: &[&str]) -> Option<&str> {
            self.layers.iter().find_map(|layer| layer.get_opt(names))
        }
    }

    impl std::fmt::Debug for Config {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Config")
                .field("layers", &self.layers.len())
                .finish()
        }
    }

    /// Construct a config from `layers`, highest priority first.
    pub fn new(layers: Vec<Box<dyn super::Config>>) -> Config {
        Config { layers }
    }
}
