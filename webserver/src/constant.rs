/// Most racers returned by a single list request.
pub const RACERS_PAGE_SIZE: u32 = 500;

/// Read when no config file is given and it exists.
pub const DEFAULT_CONFIG_PATH: &str = "dev-config.yaml";
