use std::collections::HashMap;

use rand::Rng;

use crate::models::models::{AnalyticsReport, Platform, TopVideo, Video};

/// Builds a synthetic performance report for the given videos. Metrics are
/// drawn from the provided RNG so callers can inject a seeded source under
/// test; the production call site passes `rand::rng()` and the output is
/// intentionally non-reproducible.
///
/// Per video: views uniform in [500, 10500), likes = views * [0.05, 0.15),
/// comments = likes * [0.01, 0.06), all floored.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, videos: &[Video]) -> AnalyticsReport {
    if videos.is_empty() {
        return AnalyticsReport {
            total_views: 0,
            total_likes: 0,
            total_comments: 0,
            top_video: None,
            platform_performance: HashMap::new(),
        };
    }

    let mut total_views = 0u64;
    let mut total_likes = 0u64;
    let mut total_comments = 0u64;
    let mut platform_performance: HashMap<Platform, u64> =
        Platform::ALL.iter().map(|p| (*p, 0)).collect();
    let mut top_video: Option<TopVideo> = None;

    for video in videos {
        let views = rng.random_range(500..10_500u64);
        let likes = (views as f64 * rng.random_range(0.05..0.15)).floor() as u64;
        let comments = (likes as f64 * rng.random_range(0.01..0.06)).floor() as u64;

        total_views += views;
        total_likes += likes;
        total_comments += comments;

        // Strictly greater, so the earliest video wins a tie.
        if top_video.as_ref().map_or(true, |top| views > top.views) {
            top_video = Some(TopVideo {
                video: video.clone(),
                views,
            });
        }

        for platform in &video.platforms {
            if let Some(total) = platform_performance.get_mut(platform) {
                *total += views;
            }
        }
    }

    AnalyticsReport {
        total_views,
        total_likes,
        total_comments,
        top_video,
        platform_performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn video(id: i64, platforms: Vec<Platform>) -> Video {
        Video {
            id,
            title: format!("video {id}"),
            description: String::new(),
            platforms,
            timestamp: "2026-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn empty_input_yields_zeroed_report() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = generate(&mut rng, &[]);
        assert_eq!(report.total_views, 0);
        assert_eq!(report.total_likes, 0);
        assert_eq!(report.total_comments, 0);
        assert!(report.top_video.is_none());
        assert!(report.platform_performance.is_empty());
    }

    #[test]
    fn totals_respect_funnel_ordering() {
        let mut rng = StdRng::seed_from_u64(7);
        let videos: Vec<Video> = (0..20)
            .map(|i| video(i, vec![Platform::Tiktok]))
            .collect();
        let report = generate(&mut rng, &videos);
        assert!(report.total_likes <= report.total_views);
        assert!(report.total_comments <= report.total_likes);
        assert!(report.total_views >= 500 * videos.len() as u64);
        assert!(report.total_views < 10_500 * videos.len() as u64);
    }

    #[test]
    fn single_platform_videos_expose_per_video_draws() {
        // One video per platform, so each platform total is exactly that
        // video's draw and the top video must match the largest of them.
        let mut rng = StdRng::seed_from_u64(42);
        let videos = vec![
            video(1, vec![Platform::Tiktok]),
            video(2, vec![Platform::Youtube]),
            video(3, vec![Platform::Xiaohongshu]),
            video(4, vec![Platform::Facebook]),
        ];
        let report = generate(&mut rng, &videos);

        let sum: u64 = report.platform_performance.values().sum();
        assert_eq!(sum, report.total_views);

        let max = *report.platform_performance.values().max().unwrap();
        let top = report.top_video.unwrap();
        assert_eq!(top.views, max);
        for draw in report.platform_performance.values() {
            assert!((500u64..10_500).contains(draw));
        }
    }

    #[test]
    fn all_known_platforms_appear_even_when_unused() {
        let mut rng = StdRng::seed_from_u64(3);
        let report = generate(&mut rng, &[video(1, vec![Platform::Tiktok])]);
        assert_eq!(report.platform_performance.len(), Platform::ALL.len());
        assert_eq!(report.platform_performance[&Platform::Facebook], 0);
    }

    #[test]
    fn same_seed_reproduces_the_report() {
        let videos = vec![
            video(1, vec![Platform::Tiktok, Platform::Youtube]),
            video(2, vec![Platform::Facebook]),
        ];
        let a = generate(&mut StdRng::seed_from_u64(99), &videos);
        let b = generate(&mut StdRng::seed_from_u64(99), &videos);
        assert_eq!(a.total_views, b.total_views);
        assert_eq!(a.total_likes, b.total_likes);
        assert_eq!(a.total_comments, b.total_comments);
        assert_eq!(
            a.top_video.as_ref().map(|t| (t.video.id, t.views)),
            b.top_video.as_ref().map(|t| (t.video.id, t.views))
        );
        assert_eq!(a.platform_performance, b.platform_performance);
    }

    /// RNG with no entropy: every uniform draw lands on the low bound, so all
    /// videos tie on views.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn view_ties_keep_the_first_video() {
        let videos = vec![
            video(10, vec![Platform::Tiktok]),
            video(20, vec![Platform::Tiktok]),
            video(30, vec![Platform::Tiktok]),
        ];
        let report = generate(&mut ZeroRng, &videos);
        let top = report.top_video.unwrap();
        assert_eq!(top.video.id, 10);
        assert_eq!(top.views, 500);
    }
}
