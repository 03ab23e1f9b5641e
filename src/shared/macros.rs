/***************************************/
/*               Macros                */
/***************************************/

// Startup helper for the binary: log the error and exit with status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                ::log::error!("ERROR: {}", e);
                std::process::exit(1);
            }
        }
    };
}
