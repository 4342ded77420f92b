/// Aggregate verdict over all analyzed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverallStatus {
    Perfect,
    Partial,
    Incomplete,
}

impl OverallStatus {
    pub fn from_counts(total: usize, present: usize, matched: usize) -> Self {
        if matched == total {
            Self::Perfect
        } else if present == total {
            Self::Partial
        } else {
            Self::Incomplete
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            Self::Perfect => {
                "🎉 **Overall Status:** ✅ **PERFECT** - All upstream changes successfully applied!"
            }
            Self::Partial => {
                "⚠️ **Overall Status:** 🟡 **PARTIAL** - All files present but some changes missing"
            }
            Self::Incomplete => {
                "❌ **Overall Status:** 🔴 **INCOMPLETE** - Missing files or changes"
            }
        }
    }
}
