//! Prompt configuration provider.
//!
//! Supplies prompt overrides from `prompts.yaml` files, merged across tiers
//! with field-by-field precedence:
//! 1. **Project** - `$CWD/.collab-kit/prompts.yaml`
//! 2. **User** - `~/.collab-kit/prompts.yaml`
//!
//! ## Environment Variables
//! - `COLLAB_KIT_PROMPTS_PATH` - Explicit prompts file (overrides all tiers)
//! - `COLLAB_KIT_PROJECT_DIR` - Project config dir (default: `./.collab-kit`)
//! - `COLLAB_KIT_USER_DIR` - User config dir (default: `~/.collab-kit`)

mod merge;
mod paths;
mod provider;

pub use merge::{merge_tiers, merge_value};
pub use paths::ConfigPaths;
pub use provider::FilePromptProvider;
