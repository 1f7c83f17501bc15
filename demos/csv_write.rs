//! CSV Writer Examples
//!
//! Writes the student table to a file and to standard output, then writes a
//! semicolon-delimited variant with LF line endings.

use qualcsv::{CsvConfig, CsvWriter, LineTerminator, OutputTarget};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== CSV Writer Examples ===\n");

    let rows = vec![
        vec!["StudentCode", "LastName", "ShoeSize", "Height", "DateOfBirth"],
        vec!["12345678", "Smith", "7", "167", "2000-04-15"],
        vec!["87654321", "\"Jones, Jr.\"", "9", "181", "1999-11-02"],
    ];

    // Example 1: Write to a file
    println!("1. Writing demos/students.csv...");
    {
        let mut writer = CsvWriter::create("demos/students.csv", CsvConfig::default())?;
        writer.write_rows_batch(&rows)?;
        println!("   Rows written: {}", writer.row_count());
        writer.save()?;
    }

    // Example 2: Same rows to standard output
    println!("\n2. Writing to stdout...");
    {
        let mut writer = OutputTarget::Stdout.open(CsvConfig::default())?;
        writer.write_rows_batch(&rows)?;
        writer.save()?;
    }

    // Example 3: Custom delimiter and line ending
    println!("\n3. Writing demos/students_semicolon.csv...");
    {
        let config = CsvConfig::default()
            .delimiter(';')
            .line_terminator(LineTerminator::Lf);
        let mut writer = CsvWriter::create("demos/students_semicolon.csv", config)?;
        writer.write_rows_batch(&rows)?;
        writer.save()?;
    }

    println!("\nDone. Run the csv_read demo to read the files back.");
    Ok(())
}
