pub trait RecordBook {
    fn marks(&self) -> String;
}

pub trait Partner {
    fn cook_meal(&self) -> String;
}

pub trait Physique {
    fn biceps_size(&self) -> String;
}

/// Builds a consistent family of [`RecordBook`], [`Partner`] and
/// [`Physique`]; the family is picked at run time by choosing the factory.
pub trait PersonFactory {
    fn make_record_book(&self) -> Box<dyn RecordBook>;
    fn make_partner(&self) -> Box<dyn Partner>;
    fn make_physique(&self) -> Box<dyn Physique>;
}

struct YourRecordBook;
struct YourPartner;
struct YourPhysique;

impl RecordBook for YourRecordBook {
    fn marks(&self) -> String {
        "3 3 3".to_string()
    }
}

impl Partner for YourPartner {
    fn cook_meal(&self) -> String {
        "Mediocre meal".to_string()
    }
}

impl Physique for YourPhysique {
    fn biceps_size(&self) -> String {
        "0".to_string()
    }
}

pub struct YourFactory;

impl PersonFactory for YourFactory {
    fn make_record_book(&self) -> Box<dyn RecordBook> {
        Box::new(YourRecordBook)
    }

    fn make_partner(&self) -> Box<dyn Partner> {
        Box::new(YourPartner)
    }

    fn make_physique(&self) -> Box<dyn Physique> {
        Box::new(YourPhysique)
    }
}

struct MothersFriendSonsRecordBook;
struct MothersFriendSonsPartner;
struct MothersFriendSonsPhysique;

impl RecordBook for MothersFriendSonsRecordBook {
    fn marks(&self) -> String {
        "5 5 5".to_string()
    }
}

impl Partner for MothersFriendSonsPartner {
    fn cook_meal(&self) -> String {
        "Perfect meal".to_string()
    }
}

impl Physique for MothersFriendSonsPhysique {
    fn biceps_size(&self) -> String {
        "9999".to_string()
    }
}

pub struct MothersFriendSonsFactory;

impl PersonFactory for MothersFriendSonsFactory {
    fn make_record_book(&self) -> Box<dyn RecordBook> {
        Box::new(MothersFriendSonsRecordBook)
    }

    fn make_partner(&self) -> Box<dyn Partner> {
        Box::new(MothersFriendSonsPartner)
    }

    fn make_physique(&self) -> Box<dyn Physique> {
        Box::new(MothersFriendSonsPhysique)
    }
}
