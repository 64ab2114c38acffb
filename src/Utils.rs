//! different utility modules used throughout the project
/// tiny module to save solution into file
pub mod logger;
/// parse document with structure like "title1 key1: value1 key2: value2 title2 key3: value3" into HashMap
pub mod task_parser;
