// End-to-end integration tests for the FitTrack Backend API
//
// A single testcontainers PostgreSQL instance is shared by the whole suite.
// Each test leases its own migrated database (test_db_<uuid>) from a pool,
// drives the real router over HTTP, and returns the database truncated on
// drop so it can be reused.

mod test_admin;
mod test_health;
mod test_nutrition;
mod test_reports;
