/// Error code registry for adsight
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Input (export parsing) errors
/// - 3000-3999: Output (report writing) errors
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Input errors (2000-2999)
    pub const INPUT_GENERIC: u16 = 2000;
    pub const INPUT_NOT_FOUND: u16 = 2001;
    pub const INPUT_PERMISSION_DENIED: u16 = 2002;
    pub const INPUT_IO_ERROR: u16 = 2003;
    pub const INPUT_MALFORMED_CSV: u16 = 2004;
    pub const INPUT_MISSING_COLUMN: u16 = 2005;
    pub const INPUT_EMPTY: u16 = 2006;
    pub const INPUT_INVALID_ENCODING: u16 = 2007;

    // Output errors (3000-3999)
    pub const OUTPUT_GENERIC: u16 = 3000;
    pub const OUTPUT_IO_ERROR: u16 = 3001;
    pub const OUTPUT_SERIALIZATION_ERROR: u16 = 3002;
    pub const OUTPUT_UNSUPPORTED_FORMAT: u16 = 3003;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_OUT_OF_RANGE: u16 = 7003;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1005 => "Invalid value in configuration",

        // Input errors
        2000 => "Generic input error",
        2001 => "Export file not found",
        2002 => "Permission denied reading export",
        2003 => "Export I/O error",
        2004 => "Export is not well-formed CSV",
        2005 => "Required export column is missing",
        2006 => "Export is empty or contains no keyword rows",
        2007 => "Export has an invalid text encoding",

        // Output errors
        3000 => "Generic output error",
        3001 => "Report I/O error",
        3002 => "Report serialization error",
        3003 => "Unsupported report format",

        // Validation errors
        7000 => "Generic validation error",
        7003 => "Value out of allowed range",

        // Other errors
        9000 => "Generic error",

        _ => "Unknown error code",
    }
}
