/// CRUD operations on the car entity against SQLite in memory
pub mod crud_tests;
