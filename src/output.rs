use colored::Colorize;

use crate::selection::NumberRange;

pub fn print_no_directories(range: NumberRange) {
    println!(
        "{}",
        format!("No directories found in range {range}").yellow()
    );
}

pub fn print_preview(count: usize, range: NumberRange, first: &str, last: &str) {
    println!();
    println!(
        "{} {}",
        "Found".bold(),
        format!("{count} directories to delete").bold().white()
    );
    println!("  {:<18} {} to {}", "Range:", range.start, range.end);
    println!("  {:<18} {}", "First directory:", first.dimmed());
    println!("  {:<18} {}", "Last directory:", last.dimmed());
}

pub fn print_dry_run_footer() {
    println!();
    println!(
        "{}",
        "DRY RUN - No files will be deleted".yellow().bold()
    );
}

pub fn print_dry_run_header() {
    println!("{}", "Performing dry run...".cyan().bold());
}

pub fn print_cancelled() {
    println!("{}", "Operation cancelled".yellow());
}

pub fn print_deleting_header() {
    println!();
    println!("{}", "Deleting directories...".bold());
}

pub fn print_summary(deleted: usize, freed: &str) {
    println!();
    println!("{}", "Operation complete:".bold().white());
    println!(
        "  {} {}",
        "Successfully deleted:".green().bold(),
        format!("{deleted} directories ({freed} freed)").green()
    );
}

pub fn print_error_count(count: usize) {
    println!(
        "  {} {}",
        "Errors encountered:".red().bold(),
        count.to_string().red()
    );
}

pub fn print_delete_error(path: &str, err: &str) {
    println!("    - {}: {}", path.dimmed(), err.red());
}

pub fn print_fatal(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg.red());
}
