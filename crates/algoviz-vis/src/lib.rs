//! AlgoViz Visualization Server
//!
//! Interactive playback of recorded algorithm executions.
//!
//! # Architecture
//!
//! - **Workbench**: Holds the live data structures and turns frontend
//!   requests into sealed [`algoviz_core::AlgorithmRun`]s
//! - **Playback**: Steps through a run manually or on a timer
//! - **Ticker**: Paces automatic advancement at the selected speed
//! - **REST API / WebSocket**: Control playback, run operations, fetch state
//!
//! # Usage
//!
//! ```ignore
//! let server = VisServer::new();
//! server.serve(3000).await;
//! ```

mod playback;
mod server;
mod ticker;
mod workbench;

pub use playback::{Playback, PlaybackState, PlaybackStatus, Speed};
pub use server::VisServer;
pub use ticker::Ticker;
pub use workbench::{Operation, SortAlgorithm, Workbench};

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Snapshot;

    #[test]
    fn workbench_runs_feed_playback() {
        let mut bench = Workbench::new();
        let run = bench
            .apply(Operation::Sort {
                algorithm: SortAlgorithm::Heap,
                values: "5,3,8,1".into(),
            })
            .unwrap();

        let mut playback = Playback::new(run);
        playback.seek(playback.total());
        assert_eq!(playback.state(), PlaybackState::Complete);
        assert_eq!(
            playback.current_snapshot(),
            &Snapshot::Array {
                values: vec![1, 3, 5, 8],
                sorted: vec![0, 1, 2, 3],
            }
        );
    }

    #[test]
    fn replacing_the_run_restarts_playback() {
        let mut bench = Workbench::new();
        let first = bench
            .apply(Operation::Sort {
                algorithm: SortAlgorithm::Bubble,
                values: "2,1".into(),
            })
            .unwrap();
        let second = bench
            .apply(Operation::Sort {
                algorithm: SortAlgorithm::Bubble,
                values: "3,2,1".into(),
            })
            .unwrap();

        let mut playback = Playback::new(first);
        playback.play();
        playback.tick();

        playback.set_run(second);
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.state(), PlaybackState::Idle);
    }
}
