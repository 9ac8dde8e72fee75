/// Summed hours and earnings for one aggregation window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub hours: f64,
    pub earnings: f64,
}

impl Bucket {
    pub fn add(&mut self, hours: f64, earnings: f64) {
        self.hours += hours;
        self.earnings += earnings;
    }

    pub fn absorb(&mut self, other: Bucket) {
        self.add(other.hours, other.earnings);
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0.0 && self.earnings == 0.0
    }
}

/// Every dashboard figure computed by one aggregation run.
///
/// `total` already includes `pending_pay_cut`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Figures {
    pub this_week: Bucket,
    pub previous_week: Bucket,
    pub this_month: Bucket,
    pub previous_month: Bucket,
    pub total: Bucket,
    pub pending_pay_cut: Bucket,
}

impl Figures {
    pub fn is_zero(&self) -> bool {
        [
            self.this_week,
            self.previous_week,
            self.this_month,
            self.previous_month,
            self.total,
            self.pending_pay_cut,
        ]
        .iter()
        .all(Bucket::is_zero)
    }
}
