pub mod compile_time {
    pub mod file_processing {
        /// Maximum source file size allowed for validation (10MB)
        /// Prevents resource exhaustion via oversized inputs
        pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

        /// Maximum number of lines per source unit
        /// Prevents unbounded per-line bookkeeping
        pub const MAX_LINE_COUNT: usize = 100_000;
    }

    pub mod lexical {
        /// Maximum length of a single line in bytes
        /// Bounds the work done by a single tokenize call
        pub const MAX_LINE_LENGTH: usize = 10_000;

        /// Maximum number of tokens produced from a single line
        /// Prevents token explosion from pathological inputs
        pub const MAX_TOKENS_PER_LINE: usize = 10_000;
    }

    pub mod syntax {
        /// Maximum total items across all chart sets during recognition
        /// Bounds recognizer memory for pathological grammars
        pub const MAX_CHART_ITEMS: usize = 1_000_000;
    }

    pub mod validation {
        /// Maximum number of worker threads for parallel validation
        /// Controls system resource consumption
        pub const MAX_WORKER_THREADS: usize = 8;
    }

    pub mod logging {
        /// Event buffer size for in-memory loggers
        /// Controls memory usage for event capture
        pub const LOG_BUFFER_SIZE: usize = 10_000;
    }
}
