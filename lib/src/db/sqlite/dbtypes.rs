use crate::schema;

pub mod table {
    use super::schema;

    pub const RACERS: &str = schema::RACERS.name;
}
