pub mod forms;
pub mod home;
pub mod recommendations;
pub mod resume;
pub mod vacancy;

pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
