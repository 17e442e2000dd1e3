pub mod db;
pub mod kv_entry;

#[cfg(test)]
mod tests;
