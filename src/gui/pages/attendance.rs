use crate::config::options::ReportKind;
use crate::table::SortOrder;

use super::Page;

pub struct AttendancePage;

pub static PAGE: AttendancePage = AttendancePage;

// sezon, mecze, widzów, średnia
impl Page for AttendancePage {
    fn kind(&self) -> ReportKind { ReportKind::Attendance }

    fn default_sort(&self) -> Option<(&'static str, SortOrder)> {
        Some(("sezon", SortOrder::Descending))
    }
}
