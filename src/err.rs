use std::io;

use position::Position;

quick_error! {
    #[derive(Debug)]
    pub enum ExtractError {
        UnknownSentenceType(ty: String) {
            description("Unknown sentence type")
            display("No field layout is registered for sentence type \"{}\"", ty)
        }
        EmptyFields {
            description("Empty field list")
            display("Decomposed sentence carries no fields")
        }
        MissingField(role: &'static str) {
            description("Missing field")
            display("Sentence has no {} field at the position its layout expects", role)
        }
        InvalidUnit(found: String) {
            description("Invalid elevation unit")
            display("Elevation unit must be \"M\" for metres, found \"{}\"", found)
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum RouteError {
        Source(err: io::Error) {
            from()
            description("Log source unavailable")
            display("Could not read from the log source: {}", err)
            cause(err)
        }
        Halted(line: usize, partial: Vec<Position>, err: ExtractError) {
            description("Extraction fault")
            display(
                "Extraction failed on line {} with {} positions already built: {}",
                line,
                partial.len(),
                err
            )
            cause(err)
        }
    }
}
