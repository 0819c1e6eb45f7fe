use crate::basic_types::sequence_generators::ConstantSequence;
use crate::basic_types::sequence_generators::GeometricSequence;
use crate::basic_types::sequence_generators::LubySequence;
use crate::basic_types::sequence_generators::SequenceGenerator;
use crate::basic_types::sequence_generators::SequenceGeneratorType;

/// The options which are used by the solver to determine when a restart should occur. The restart
/// intervals are expressed in numbers of conflicts and spaced by a configurable sequence:
/// constant intervals, geometrically growing intervals, or the Luby sequence
/// (see [\[1\]](https://www.sciencedirect.com/science/article/pii/0020019093900299)).
///
/// Restarting only pays off when the search can take a different path afterwards, e.g. with a
/// randomised brancher or with an objective cut that tightened in the meantime; the solver skips
/// restarts when the brancher reports them as pointless.
#[derive(Debug, Clone, Copy)]
pub struct RestartOptions {
    /// Decides the sequence based on which the restarts are performed. To be used in combination
    /// with [`RestartOptions::base_interval`].
    pub sequence_generator_type: SequenceGeneratorType,
    /// The base interval length is used as a multiplier to the restart sequence. For example,
    /// constant restarts with base interval 100 means a restart is triggered every 100 conflicts.
    pub base_interval: u64,
    /// The minimum number of conflicts to be reached before the first restart is considered.
    pub min_num_conflicts_before_first_restart: u64,
    /// The coefficient of the geometric sequence `x_i = x_{i-1} * geometric_coef` where
    /// `x_1 = base_interval`. Used only if [`RestartOptions::sequence_generator_type`] is
    /// assigned to [`SequenceGeneratorType::Geometric`].
    pub geometric_coef: f64,
}

impl Default for RestartOptions {
    fn default() -> Self {
        RestartOptions {
            sequence_generator_type: SequenceGeneratorType::Constant,
            base_interval: 50,
            min_num_conflicts_before_first_restart: 10000,
            geometric_coef: 1.1,
        }
    }
}

/// Tracks the number of conflicts since the last restart and decides, based on the configured
/// sequence, whether the search should abandon the current tree and reopen from the root.
#[derive(Debug)]
pub(crate) struct RestartStrategy {
    sequence_generator: Box<dyn SequenceGenerator>,
    number_of_conflicts_encountered_since_restart: u64,
    number_of_conflicts_until_restart: u64,
    minimum_number_of_conflicts_before_first_restart: u64,
    number_of_restarts: u64,
}

impl RestartStrategy {
    pub(crate) fn new(options: RestartOptions) -> RestartStrategy {
        let mut sequence_generator: Box<dyn SequenceGenerator> =
            match options.sequence_generator_type {
                SequenceGeneratorType::Constant => {
                    Box::new(ConstantSequence::new(options.base_interval as i64))
                }
                SequenceGeneratorType::Geometric => Box::new(GeometricSequence::new(
                    options.base_interval as i64,
                    options.geometric_coef,
                )),
                SequenceGeneratorType::Luby => {
                    Box::new(LubySequence::new(options.base_interval as i64))
                }
            };

        let number_of_conflicts_until_restart = sequence_generator.next().try_into().expect(
            "expected the restart generator to generate a positive value but it generated a negative one",
        );

        RestartStrategy {
            sequence_generator,
            number_of_conflicts_encountered_since_restart: 0,
            number_of_conflicts_until_restart,
            minimum_number_of_conflicts_before_first_restart: options
                .min_num_conflicts_before_first_restart,
            number_of_restarts: 0,
        }
    }

    /// Notifies the restart strategy that a conflict has taken place so that it can adjust its
    /// internal counters.
    pub(crate) fn notify_conflict(&mut self) {
        self.number_of_conflicts_encountered_since_restart += 1;
    }

    /// Determines whether the restart strategy indicates that a restart should take place. The
    /// first restart additionally requires
    /// [`RestartOptions::min_num_conflicts_before_first_restart`] conflicts to have taken place,
    /// so that short searches never restart.
    pub(crate) fn should_restart(&self) -> bool {
        if self.number_of_restarts == 0
            && self.number_of_conflicts_encountered_since_restart
                < self.minimum_number_of_conflicts_before_first_restart
        {
            return false;
        }

        self.number_of_conflicts_encountered_since_restart
            >= self.number_of_conflicts_until_restart
    }

    /// Notifies the restart strategy that a restart has taken place, advancing the sequence for
    /// the next restart interval.
    pub(crate) fn notify_restart(&mut self) {
        self.number_of_restarts += 1;
        self.number_of_conflicts_encountered_since_restart = 0;
        self.number_of_conflicts_until_restart = self.sequence_generator.next().try_into().expect(
            "expected the restart generator to generate a positive value but it generated a negative one",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eager_options() -> RestartOptions {
        RestartOptions {
            sequence_generator_type: SequenceGeneratorType::Constant,
            base_interval: 2,
            min_num_conflicts_before_first_restart: 3,
            geometric_coef: 1.1,
        }
    }

    #[test]
    fn the_first_restart_waits_for_the_minimum_number_of_conflicts() {
        let mut strategy = RestartStrategy::new(eager_options());

        strategy.notify_conflict();
        strategy.notify_conflict();
        assert!(!strategy.should_restart());

        strategy.notify_conflict();
        assert!(strategy.should_restart());
    }

    #[test]
    fn later_restarts_follow_the_sequence() {
        let mut strategy = RestartStrategy::new(eager_options());

        strategy.notify_conflict();
        strategy.notify_conflict();
        strategy.notify_conflict();
        assert!(strategy.should_restart());
        strategy.notify_restart();

        strategy.notify_conflict();
        assert!(!strategy.should_restart());
        strategy.notify_conflict();
        assert!(strategy.should_restart());
    }
}
