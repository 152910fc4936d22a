/// What the user picked at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Exit,
    /// Anything that is not one of the numbered options, numeric or not.
    Invalid,
}

impl MenuChoice {
    pub fn parse(line: &str) -> Self {
        match line.trim().parse::<i64>() {
            Ok(1) => MenuChoice::Add,
            Ok(2) => MenuChoice::List,
            Ok(3) => MenuChoice::Search,
            Ok(4) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

pub const WELCOME: &str = "Welcome to your Workout Regimen!";

pub const MENU: &str = "Using this workout program, you can add to, search from and print out \
your personal regimen. Enter the number next to an option and press ENTER to access such method.

1 Add an exercise
2 Print regimen
3 Search exercises
4 Exit
";

pub const ADD_INTRO: &str = "This method adds an exercise completely customized by you to your \
regimen. Please enter in the relevant information regarding the exercise as prompted.";

pub const SEARCH_INTRO: &str = "This method searches your entire regimen for any mention of the \
search term you provide. All potential matches are then printed on screen.";

pub const SEARCH_PROMPT: &str = "Please enter search term: ";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const RETURN_PROMPT: &str = "Press ENTER to return to the menu";
pub const GOODBYE: &str = "Goodbye!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_options() {
        assert_eq!(MenuChoice::parse("1"), MenuChoice::Add);
        assert_eq!(MenuChoice::parse("2\n"), MenuChoice::List);
        assert_eq!(MenuChoice::parse("  3 "), MenuChoice::Search);
        assert_eq!(MenuChoice::parse("4"), MenuChoice::Exit);
    }

    #[test]
    fn test_out_of_range_and_non_numeric_are_invalid() {
        for input in ["0", "5", "-1", "", "add", "1.5", "one"] {
            assert_eq!(MenuChoice::parse(input), MenuChoice::Invalid, "{input:?}");
        }
    }
}
