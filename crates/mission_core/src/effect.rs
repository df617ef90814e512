use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartCounter { duration: Duration },
    StopCounter,
    StartFeed { interval: Duration },
    StopFeed,
    ScheduleAnalysis {
        request_id: crate::RequestId,
        delay: Duration,
    },
    CancelAnalysis { request_id: crate::RequestId },
}
