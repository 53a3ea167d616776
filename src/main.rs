use std::process::ExitCode;

fn main() -> ExitCode {
    match oatbuild::run() {
        Ok(code) => code,
        // fatal before / outside parsing: unreadable build file and the like
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
