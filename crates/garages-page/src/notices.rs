//! User-facing texts shown in the page's error and success slots.
//!
//! The page is shown to Hebrew-speaking staff; keep the wording in sync with
//! the rest of the UI.

pub const LOAD_FAILED: &str = "שגיאה בטעינת המוסכים. אנא נסה שוב.";
pub const CREATE_FAILED: &str = "שגיאה בהוספת המוסכים. אנא נסה שוב.";
pub const NOTHING_SELECTED: &str = "לא נבחרו מוסכים להוספה.";

#[must_use]
pub fn all_duplicates(count: usize) -> String {
    format!("כל {count} המוסכים שנבחרו כבר קיימים בטבלה.")
}

#[must_use]
pub fn some_duplicates(duplicates: usize, new: usize) -> String {
    format!("{duplicates} מוסכים כבר קיימים בטבלה. הוספת {new} חדשים בלבד.")
}

#[must_use]
pub fn created(count: usize) -> String {
    format!("{count} מוסך נוסף בהצלחה!")
}
