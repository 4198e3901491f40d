use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(Uuid);

impl PersonId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
struct Contact {
    mail_address: Option<String>,
    phone_number: Option<String>,
}

#[derive(Debug)]
struct PersonData {
    id: PersonId,
    last_name: String,
    first_name: String,
    contact: RefCell<Contact>,
}

/// 可以邀請別人，也可以參加活動的人。
///
/// `Person` 是共享的 handle：clone 指向同一份資料，活動裡登記的參加者
/// 與呼叫端手上的是同一個人，之後修改聯絡資料在查詢結果中也看得到。
/// 身分由建立時產生的 [`PersonId`] 決定，即使姓名完全相同，
/// 分別建立的兩個 `Person` 仍是不同的參加者。
/// 參加活動的次數不存在這裡，由 [`crate::Controller::count_events_for_person`] 即時計算。
#[derive(Debug, Clone)]
pub struct Person(Rc<PersonData>);

impl Person {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self(Rc::new(PersonData {
            id: PersonId::generate(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            contact: RefCell::new(Contact::default()),
        }))
    }

    pub fn id(&self) -> PersonId {
        self.0.id
    }

    pub fn last_name(&self) -> &str {
        &self.0.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.0.first_name
    }

    /// "姓 名"，排序時的次要鍵
    pub fn full_name(&self) -> String {
        format!("{} {}", self.0.last_name, self.0.first_name)
    }

    pub fn mail_address(&self) -> Option<String> {
        self.0.contact.borrow().mail_address.clone()
    }

    pub fn set_mail_address(&self, mail_address: impl Into<String>) {
        self.0.contact.borrow_mut().mail_address = Some(mail_address.into());
    }

    pub fn phone_number(&self) -> Option<String> {
        self.0.contact.borrow().phone_number.clone()
    }

    pub fn set_phone_number(&self, phone_number: impl Into<String>) {
        self.0.contact.borrow_mut().phone_number = Some(phone_number.into());
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.last_name, self.0.first_name)
    }
}

/// A participant together with the number of events they are registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participation<'a> {
    pub person: &'a Person,
    pub event_count: usize,
}
