//! Lazy decomposition of ASCII figures into the rectangles that tile them.
//!
//! ```text
//! +------+----+        +------+   +----+
//! |      |    |   ->   |      |   |    |
//! +------+----+        +------+   +----+
//! ```
pub mod decomposition;
pub use decomposition::*;

pub mod figure;
pub use figure::*;

pub mod heading;
pub use heading::*;

pub mod rectangle;
pub use rectangle::*;
