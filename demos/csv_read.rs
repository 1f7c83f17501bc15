//! CSV Reader Examples
//!
//! Demonstrates:
//! - Tokenizing a string with embedded qualifiers
//! - Reading a file with headers
//! - Custom delimiter and line ending
//!
//! Run the csv_write demo first to produce the input files.

use qualcsv::{CsvConfig, CsvReader, LineTerminator, QualifierMode};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== CSV Reader Examples ===\n");

    // Example 1: Tokenize in-memory text
    println!("1. Reading from a string...");
    {
        let text = "Id,StringColumn,StringWithQuotes,Number1,Number2,Number3\r\n\
                    1,test string,\"Commas, \"In Text\" are weird\",10,20,30";
        let mut reader = CsvReader::from_text(text, CsvConfig::default())?;
        for row_result in reader.rows() {
            let row = row_result?;
            println!("   {} fields: {:?}", row.len(), row);
        }
    }

    // Example 2: Read with headers
    println!("\n2. Reading demos/students.csv with headers...");
    {
        let mut reader = CsvReader::open("demos/students.csv")?.has_header(true);
        let rows = reader.read_all()?;
        if let Some(headers) = reader.headers() {
            println!("   Headers: {:?}", headers);
        }
        for row in &rows {
            println!("   {:?}", row);
        }
        println!("   Total rows read: {}", reader.row_count());
    }

    // Example 3: Custom delimiter, qualifiers stripped
    println!("\n3. Reading demos/students_semicolon.csv...");
    {
        let config = CsvConfig::default()
            .delimiter(';')
            .line_terminator(LineTerminator::Lf)
            .qualifier_mode(QualifierMode::Doubled)
            .strip_qualifiers(true);
        let mut reader = CsvReader::open_with_config("demos/students_semicolon.csv", config)?;
        for row_result in reader.rows() {
            println!("   {:?}", row_result?);
        }
    }

    Ok(())
}
