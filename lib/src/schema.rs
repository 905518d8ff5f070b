//! Declarative table definitions, and SQL DDL generated from them.

/// SQL dialect to generate DDL for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq,
         strum::AsRefStr, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Dialect {
    Sqlite,
    Mysql,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnType {
    /// Auto-generated, unique, increasing integer.
    Serial,
    Text,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub type_: ColumnType,
    pub primary_key: bool,
    pub not_null: bool,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

pub const RACERS: Table = Table {
    name: "racers",
    columns: &[
        Column {
            name: "id",
            type_: ColumnType::Serial,
            primary_key: true,
            not_null: true,
        },
        Column {
            name: "name",
            type_: ColumnType::Text,
            primary_key: false,
            not_null: true,
        },
    ],
};

fn column_sql(column: &Column, dialect: Dialect) -> String {
    let mut sql = match (column.type_, dialect) {
        // sqlite only auto-generates for an INTEGER PRIMARY KEY, and
        // AUTOINCREMENT stops ids of deleted rows being reused
        (ColumnType::Serial, Dialect::Sqlite) if column.primary_key =>
            return format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", column.name),
        (ColumnType::Serial, Dialect::Sqlite) => "INTEGER NOT NULL UNIQUE",
        // BIGINT UNSIGNED NOT NULL AUTO_INCREMENT UNIQUE
        (ColumnType::Serial, Dialect::Mysql) => "SERIAL",
        (ColumnType::Text, _) => "TEXT",
    }.to_owned();

    if column.primary_key {
        sql.push_str(" PRIMARY KEY");
    } else if column.not_null && column.type_ != ColumnType::Serial {
        sql.push_str(" NOT NULL");
    }
    format!("{} {sql}", column.name)
}

/// Generate a `CREATE TABLE` statement for `table`.
pub fn create_table_sql(table: &Table, dialect: Dialect) -> String {
    let columns: Vec<String> = table.columns.iter()
        .map(|c| format!("    {}", column_sql(c, dialect)))
        .collect();
    format!("CREATE TABLE IF NOT EXISTS {} (\n{}\n);",
            table.name, columns.join(",\n"))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use super::*;

    #[test]
    fn racers_has_id_and_name_only() {
        assert_eq!(RACERS.columns.len(), 2);
        let id = RACERS.column("id").unwrap();
        assert_eq!(id.type_, ColumnType::Serial);
        assert!(id.primary_key);
        let name = RACERS.column("name").unwrap();
        assert_eq!(name.type_, ColumnType::Text);
        assert!(name.not_null);
        assert!(!name.primary_key);
    }

    #[test]
    fn mysql_ddl() {
        assert_eq!(create_table_sql(&RACERS, Dialect::Mysql),
                   "CREATE TABLE IF NOT EXISTS racers (\n    \
                    id SERIAL PRIMARY KEY,\n    \
                    name TEXT NOT NULL\n);");
    }

    #[test]
    fn sqlite_ddl() {
        assert_eq!(create_table_sql(&RACERS, Dialect::Sqlite),
                   "CREATE TABLE IF NOT EXISTS racers (\n    \
                    id INTEGER PRIMARY KEY AUTOINCREMENT,\n    \
                    name TEXT NOT NULL\n);");
    }

    #[test]
    fn dialect_names() {
        assert_eq!(Dialect::from_str("MySQL"), Ok(Dialect::Mysql));
        assert_eq!(Dialect::Sqlite.as_ref(), "sqlite");
        assert!(Dialect::from_str("postgres").is_err());
    }
}
