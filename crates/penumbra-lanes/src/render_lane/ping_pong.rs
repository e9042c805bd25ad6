// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Two-slot buffer pools for chained full-screen passes.

/// The two slots involved in one write, returned by [`PingPong::swap`].
#[derive(Debug)]
pub struct PingPongSwap<'a, T> {
    /// The slot written by the previous stage. Sample from this one.
    pub read: &'a T,
    /// The slot the current stage draws into.
    pub write: &'a T,
}

/// A pair of buffers and the index of the one holding the latest output.
///
/// A stage never picks slots by hand: [`PingPong::swap`] flips the index and hands
/// back the previous output as `read` together with the other slot as `write`.
/// After the stage has drawn, [`PingPong::current`] is its output.
///
/// # Examples
///
/// ```
/// use penumbra_lanes::render_lane::PingPong;
///
/// let mut pool = PingPong::new("a", "b");
/// assert_eq!(*pool.current(), "a");
///
/// let swap = pool.swap();
/// assert_eq!((*swap.read, *swap.write), ("a", "b"));
/// assert_eq!(*pool.current(), "b");
/// ```
#[derive(Debug)]
pub struct PingPong<T> {
    slots: [T; 2],
    current: usize,
    writes: u64,
}

impl<T> PingPong<T> {
    /// Creates a pool whose current slot is `first`.
    pub fn new(first: T, second: T) -> Self {
        Self {
            slots: [first, second],
            current: 0,
            writes: 0,
        }
    }

    /// The slot holding the latest output.
    pub fn current(&self) -> &T {
        &self.slots[self.current]
    }

    /// Index of the current slot, 0 or 1.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of swaps since creation.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Flips the current slot and returns the previous output and the new write target.
    pub fn swap(&mut self) -> PingPongSwap<'_, T> {
        let read = self.current;
        self.current ^= 1;
        self.writes += 1;
        PingPongSwap {
            read: &self.slots[read],
            write: &self.slots[self.current],
        }
    }

    /// Both slots, in creation order.
    pub fn slots(&self) -> &[T; 2] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_swap_alternates_once() {
        let mut pool = PingPong::new(0, 1);
        for n in 1..=5u64 {
            pool.swap();
            assert_eq!(pool.writes(), n);
            assert_eq!(pool.current_index() as u64, n % 2);
        }
    }

    #[test]
    fn read_is_previous_output() {
        let mut pool = PingPong::new('a', 'b');
        let mut outputs = Vec::new();
        for _ in 0..4 {
            let swap = pool.swap();
            assert_ne!(swap.read, swap.write);
            outputs.push(*swap.write);
            assert_eq!(pool.current(), outputs.last().unwrap_or(&'?'));
        }
        assert_eq!(outputs, vec!['b', 'a', 'b', 'a']);
    }

    #[test]
    fn reading_after_n_writes_yields_write_n() {
        use std::cell::RefCell;

        let mut pool = PingPong::new(RefCell::new(Vec::new()), RefCell::new(Vec::new()));
        for n in 1..=3u32 {
            let swap = pool.swap();
            let previous = swap.read.borrow().last().copied();
            assert_eq!(previous, if n == 1 { None } else { Some(n - 1) });
            swap.write.borrow_mut().push(n);
        }
        assert_eq!(pool.current().borrow().last(), Some(&3));
    }
}
