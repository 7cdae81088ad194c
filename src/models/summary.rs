/// Value of the fixed "specializations" tile; the backend exposes no count.
pub const SPECIALIZATION_COUNT: u64 = 4;

/// One backend-driven dashboard counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryTile {
    Users,
    Courses,
    Questions,
    Lessons,
}

impl SummaryTile {
    pub const ALL: [SummaryTile; 4] = [
        SummaryTile::Users,
        SummaryTile::Courses,
        SummaryTile::Lessons,
        SummaryTile::Questions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SummaryTile::Users => "Learners",
            SummaryTile::Courses => "Courses",
            SummaryTile::Questions => "Questions",
            SummaryTile::Lessons => "Lessons",
        }
    }
}

/// Counters on the dashboard screen. Every counter starts at 0 and only
/// changes when its request succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub users: u64,
    pub courses: u64,
    pub questions: u64,
    pub lessons: u64,
}

impl DashboardSummary {
    pub fn get(&self, tile: SummaryTile) -> u64 {
        match tile {
            SummaryTile::Users => self.users,
            SummaryTile::Courses => self.courses,
            SummaryTile::Questions => self.questions,
            SummaryTile::Lessons => self.lessons,
        }
    }

    pub fn set(&mut self, tile: SummaryTile, value: u64) {
        match tile {
            SummaryTile::Users => self.users = value,
            SummaryTile::Courses => self.courses = value,
            SummaryTile::Questions => self.questions = value,
            SummaryTile::Lessons => self.lessons = value,
        }
    }
}
