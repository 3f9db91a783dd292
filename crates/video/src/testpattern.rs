use {
    crate::VideoError,
    futures_core::Stream,
    image::{CHANNELS, Image},
    std::{
        pin::Pin,
        task::{Context, Poll},
        time::Duration,
    },
    tokio::time::{Interval, MissedTickBehavior},
};

// tokio intervals reject a zero period
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Synthetic camera producing a moving color gradient at a fixed rate.
///
/// Must be created inside a tokio runtime.
pub struct TestPattern {
    width: usize,
    height: usize,
    counter: u64,
    interval: Interval,
}

impl TestPattern {
    pub fn new(width: usize, height: usize, frame_rate: f32) -> Self {
        let period = Duration::from_secs_f32(1.0 / frame_rate.max(0.1)).max(MIN_PERIOD);
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            width,
            height,
            counter: 0,
            interval,
        }
    }

    fn render(&self) -> Result<Image, VideoError> {
        let shift = self.counter as usize;
        let mut data = Vec::with_capacity(self.width * self.height * CHANNELS);
        for y in 0..self.height {
            for x in 0..self.width {
                data.push(((x + shift) % 256) as u8);
                data.push(((y + shift) % 256) as u8);
                data.push((shift % 256) as u8);
            }
        }
        Ok(Image::new(self.width, self.height, data)?)
    }
}

impl Stream for TestPattern {
    type Item = Result<Image, VideoError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.interval.poll_tick(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(_) => {
                this.counter += 1;
                Poll::Ready(Some(this.render()))
            }
        }
    }
}
