/// Knowledge-base spelling that diverges from the renderer's spelling.
pub struct SpellingOverride {
    /// Normalized knowledge-base form.
    pub from: &'static str,
    /// Canonical key of the concept in [`crate::point_table::POINT_TABLE`].
    pub to: &'static str,
}

/// Every known irregular spelling, enumerated explicitly.
pub const SPELLING_OVERRIDES: &[SpellingOverride] = &[
    // Knowledge base "Sevikuttri_Kaalam", scene "9_Sevikutri_L/R".
    SpellingOverride {
        from: "sevikuttri",
        to: "sevikutri",
    },
    SpellingOverride {
        from: "pullai",
        to: "pallai",
    },
    SpellingOverride {
        from: "thilartha",
        to: "thilardha",
    },
    SpellingOverride {
        from: "uchi",
        to: "utchi",
    },
    SpellingOverride {
        from: "natchathirap",
        to: "natchathira",
    },
];
