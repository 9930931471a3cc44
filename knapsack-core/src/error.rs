#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidItems {
    Missing,
    Empty,
    Weight { index: usize, weight: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    MissingOutput,
    InvalidItems(InvalidItems),
    TooManyItems {
        count: usize,
        max: usize,
    },
    InvalidCapacity {
        capacity: i32,
        max: i32,
    },
    DimensionOverflow {
        count: usize,
        width: usize,
    },
    ArithmeticOverflow {
        item: usize,
        capacity: usize,
    },
    AllocationFailure {
        buffer: &'static str,
        len: usize,
    },
    InvalidConfig {
        reason: String,
    },
}

/// Numeric status surfaced by `solve_status`. `Ok` is the only success code.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok = 0,
    MissingOutput = 1,
    InvalidItems = 2,
    TooManyItems = 3,
    InvalidCapacity = 4,
    DimensionOverflow = 5,
    ArithmeticOverflow = 6,
    AllocationFailure = 7,
    InvalidConfig = 8,
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl SolveError {
    pub fn status(&self) -> Status {
        match self {
            SolveError::MissingOutput => Status::MissingOutput,
            SolveError::InvalidItems(_) => Status::InvalidItems,
            SolveError::TooManyItems { .. } => Status::TooManyItems,
            SolveError::InvalidCapacity { .. } => Status::InvalidCapacity,
            SolveError::DimensionOverflow { .. } => Status::DimensionOverflow,
            SolveError::ArithmeticOverflow { .. } => Status::ArithmeticOverflow,
            SolveError::AllocationFailure { .. } => Status::AllocationFailure,
            SolveError::InvalidConfig { .. } => Status::InvalidConfig,
        }
    }
}

impl From<SolveError> for Status {
    fn from(e: SolveError) -> Self {
        e.status()
    }
}

impl std::fmt::Display for InvalidItems {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidItems::Missing => write!(f, "no item sequence was supplied"),
            InvalidItems::Empty => write!(f, "item sequence is empty"),
            InvalidItems::Weight { index, weight } => {
                write!(f, "item {} has invalid weight '{}'", index, weight)
            }
        }
    }
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::MissingOutput => write!(f, "No result destination was supplied"),
            SolveError::InvalidItems(reason) => write!(f, "Invalid items: {}", reason),
            SolveError::TooManyItems { count, max } => write!(
                f,
                "Too many items. Maximum: '{}', Actual: '{}'",
                max, count
            ),
            SolveError::InvalidCapacity { capacity, max } => write!(
                f,
                "Capacity '{}' is outside the allowed range [0, {}]",
                capacity, max
            ),
            SolveError::DimensionOverflow { count, width } => write!(
                f,
                "Decision matrix of {} x {} cells overflows addressable size",
                count, width
            ),
            SolveError::ArithmeticOverflow { item, capacity } => write!(
                f,
                "Value overflow while adding item {} at capacity {}",
                item, capacity
            ),
            SolveError::AllocationFailure { buffer, len } => write!(
                f,
                "Failed to allocate {} buffer of {} elements",
                buffer, len
            ),
            SolveError::InvalidConfig { reason } => {
                write!(f, "Invalid solver config: {}", reason)
            }
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::MissingOutput => "missing_output",
            Status::InvalidItems => "invalid_items",
            Status::TooManyItems => "too_many_items",
            Status::InvalidCapacity => "invalid_capacity",
            Status::DimensionOverflow => "dimension_overflow",
            Status::ArithmeticOverflow => "arithmetic_overflow",
            Status::AllocationFailure => "allocation_failure",
            Status::InvalidConfig => "invalid_config",
        };
        write!(f, "{}", name)
    }
}

impl std::error::Error for SolveError {}

pub type SolveResult<T> = std::result::Result<T, SolveError>;
