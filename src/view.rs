//! View Renderer
//!
//! Pure functions from collections to a card-list description. The Leptos
//! adapter in `components::record_list` turns this into DOM.

use crate::models::{Employee, Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

/// One row in a card body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLine {
    Info { label: &'static str, value: String },
    Tag(Badge),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Edit and delete actions are bound to this
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Badge,
    pub lines: Vec<CardLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub heading: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty(Placeholder),
    Cards(Vec<Card>),
}

impl ListView {
    pub fn cards(&self) -> &[Card] {
        match self {
            ListView::Empty(_) => &[],
            ListView::Cards(cards) => cards,
        }
    }
}

/// Entry of the task form's assignment dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub fn render_employees(employees: &[Employee]) -> ListView {
    if employees.is_empty() {
        return ListView::Empty(Placeholder {
            heading: "No Employees Yet",
            hint: "Click \"Add Employee\" to create your first employee",
        });
    }

    ListView::Cards(employees.iter().map(employee_card).collect())
}

fn employee_card(emp: &Employee) -> Card {
    let badge = if emp.is_active {
        Badge { label: "Active".into(), class: "badge-active" }
    } else {
        Badge { label: "Inactive".into(), class: "badge-inactive" }
    };

    let mut lines = Vec::new();
    if let Some(position) = emp.position.as_ref().filter(|p| !p.is_empty()) {
        lines.push(CardLine::Info { label: "Position:", value: position.clone() });
    }
    lines.push(CardLine::Info { label: "ID:", value: emp.id.clone() });

    Card {
        id: emp.id.clone(),
        title: emp.name.clone(),
        subtitle: Some(emp.email.clone()),
        badge,
        lines,
    }
}

/// Task cards resolve assignees against `employees`
pub fn render_tasks(tasks: &[Task], employees: &[Employee]) -> ListView {
    if tasks.is_empty() {
        return ListView::Empty(Placeholder {
            heading: "No Tasks Yet",
            hint: "Click \"Add Task\" to create your first task",
        });
    }

    ListView::Cards(tasks.iter().map(|task| task_card(task, employees)).collect())
}

fn task_card(task: &Task, employees: &[Employee]) -> Card {
    let mut lines = Vec::new();
    if let Some(description) = task.description.as_ref().filter(|d| !d.is_empty()) {
        lines.push(CardLine::Info { label: "Description:", value: description.clone() });
    }
    match assignee(task, employees) {
        Some(emp) => lines.push(CardLine::Info { label: "Assigned to:", value: emp.name.clone() }),
        None => lines.push(CardLine::Tag(Badge { label: "Unassigned".into(), class: "badge-pending" })),
    }
    lines.push(CardLine::Info { label: "ID:", value: task.id.clone() });

    Card {
        id: task.id.clone(),
        title: task.title.clone(),
        subtitle: None,
        badge: status_badge(task.status),
        lines,
    }
}

pub fn status_badge(status: TaskStatus) -> Badge {
    let class = match status {
        TaskStatus::Pending => "badge-pending",
        TaskStatus::InProgress => "badge-in-progress",
        TaskStatus::Done => "badge-done",
    };
    Badge { label: status.label().to_string(), class }
}

/// Dangling references read as unassigned
pub fn assignee<'a>(task: &Task, employees: &'a [Employee]) -> Option<&'a Employee> {
    let id = task.employee_id.as_deref()?;
    employees.iter().find(|e| e.id == id)
}

pub fn assignment_options(employees: &[Employee]) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: "-- Unassigned --".to_string(),
    })
    .chain(employees.iter().map(|e| SelectOption {
        value: e.id.clone(),
        label: e.name.clone(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_employee(id: &str, name: &str, is_active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            position: None,
            is_active,
        }
    }

    fn make_task(id: &str, status: TaskStatus, employee_id: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status,
            employee_id: employee_id.map(str::to_string),
        }
    }

    #[test]
    fn test_empty_employees_placeholder() {
        match render_employees(&[]) {
            ListView::Empty(p) => assert_eq!(p.heading, "No Employees Yet"),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tasks_placeholder() {
        let view = render_tasks(&[], &[make_employee("e1", "Ann", true)]);
        assert!(view.cards().is_empty());
        assert!(matches!(view, ListView::Empty(Placeholder { heading: "No Tasks Yet", .. })));
    }

    #[test]
    fn test_employee_card() {
        let mut ann = make_employee("e1", "Ann", true);
        ann.position = Some("Lead".into());
        let view = render_employees(&[ann, make_employee("e2", "Bo", false)]);
        let cards = view.cards();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Ann");
        assert_eq!(cards[0].subtitle.as_deref(), Some("ann@x.com"));
        assert_eq!(cards[0].badge.label, "Active");
        assert_eq!(cards[0].lines[0], CardLine::Info { label: "Position:", value: "Lead".into() });
        assert_eq!(cards[1].badge.label, "Inactive");
        assert_eq!(cards[1].lines, vec![CardLine::Info { label: "ID:", value: "e2".into() }]);
    }

    #[test]
    fn test_service_order_kept() {
        let view = render_employees(&[make_employee("z", "Zed", true), make_employee("a", "Abe", true)]);
        let ids: Vec<_> = view.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["z", "a"]);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_badge(TaskStatus::InProgress).label, "In Progress");
        assert_eq!(status_badge(TaskStatus::InProgress).class, "badge-in-progress");
        assert_eq!(status_badge(TaskStatus::Done).label, "Done");
        assert_eq!(status_badge(TaskStatus::Pending).label, "Pending");
    }

    #[test]
    fn test_assigned_task_shows_name() {
        let employees = [make_employee("e1", "Ann", true)];
        let view = render_tasks(&[make_task("t1", TaskStatus::Done, Some("e1"))], &employees);
        assert!(view.cards()[0]
            .lines
            .contains(&CardLine::Info { label: "Assigned to:", value: "Ann".into() }));
    }

    #[test]
    fn test_dangling_assignee_is_unassigned() {
        let employees = [make_employee("e1", "Ann", true)];
        let tasks = [
            make_task("t1", TaskStatus::Pending, Some("gone")),
            make_task("t2", TaskStatus::Pending, None),
        ];
        for card in render_tasks(&tasks, &employees).cards() {
            assert!(card
                .lines
                .iter()
                .any(|l| matches!(l, CardLine::Tag(b) if b.label == "Unassigned")));
        }
    }

    #[test]
    fn test_assignment_options() {
        let options = assignment_options(&[make_employee("e1", "Ann", true)]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "-- Unassigned --");
        assert_eq!(options[0].value, "");
        assert_eq!(options[1].value, "e1");
    }
}
