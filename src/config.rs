/// Base URL of the SWAPI instance, overridable via `--base-url`
pub const DEFAULT_BASE_URL: &str = "https://swapi.py4e.com/api";

/// Number of people fetched concurrently per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Fallback value stored for missing or unresolvable fields
pub const SENTINEL: &str = "error";

/// Separator between resolved cross-reference names
pub const NAME_SEPARATOR: &str = ", ";

/// Postgres connection defaults, overridable via POSTGRES_* env vars
pub const DEFAULT_PG_USER: &str = "swapi";
pub const DEFAULT_PG_PASSWORD: &str = "secret_of_swapi";
pub const DEFAULT_PG_DB: &str = "swapi";
pub const DEFAULT_PG_HOST: &str = "localhost";
pub const DEFAULT_PG_PORT: &str = "5431";
