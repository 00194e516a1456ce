pub mod assembler;
pub mod cleaner;
pub mod records;
pub mod table;
