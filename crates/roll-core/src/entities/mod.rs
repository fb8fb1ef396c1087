//! Entity structs for every record type the backend serves.
//!
//! Each entity has the full record shape (as fetched) and an `*UpsertReq`
//! payload type that excludes the id and server-maintained fields.

mod announcement;
mod attendance;
mod grade;
mod member;
mod student;
mod teacher;

pub use announcement::{Announcement, AnnouncementUpsertReq};
pub use attendance::{AttendanceRecord, AttendanceStudent, AttendanceUpsertReq};
pub use grade::{StudentGrade, StudentGradeUpsertReq};
pub use member::{Member, MemberUpsertReq};
pub use student::{Student, StudentUpsertReq};
pub use teacher::{Teacher, TeacherUpsertReq};
