pub mod budget;
pub mod enum_types;
pub mod expense;
pub mod goal;
pub mod notification;
pub mod session;
pub mod social;
pub mod user;

pub use budget::{BudgetAnalysis, NewBudgetAnalysis};
pub use enum_types::{FriendStatus, GoalRole};
pub use expense::{Expense, MonthlyExpense, NewExpense, NewMonthlyExpense};
pub use goal::{Goal, GoalItem, NewGoal, NewGoalItem, NewSharedGoal, SharedGoal};
pub use notification::{NewNotification, Notification};
pub use session::{MagicLink, NewMagicLink, NewSession, Session};
pub use social::{ChatMessage, Friend, Invite, NewChatMessage, NewFriend, NewInvite};
pub use user::{NewUser, User};
